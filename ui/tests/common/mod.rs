use std::time::Duration;

use egui_kittest::Harness;
use podium_business::{CommitTrigger, RecordsFetch, TableConfig};
use podium_ui::PodiumApp;
use podium_ui::state::State;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ROWS_PATH: &str = "/example-assets/olympic-winners.json";

/// Time to wait for the mock server between frames (milliseconds).
const API_RESPONSE_WAIT_MS: u64 = 25;

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, PodiumApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, PodiumApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, PodiumApp> {
        &self.harness
    }

    /// App with `Time` under test control, backed by a mock answering `response`.
    pub async fn new_app(response: ResponseTemplate) -> Self {
        Self::new_app_with_trigger(response, CommitTrigger::default()).await
    }

    /// Like [`TestCtx::new_app`], committing cell edits on `trigger`.
    pub async fn new_app_with_trigger(response: ResponseTemplate, trigger: CommitTrigger) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(ROWS_PATH))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let config = TableConfig::new(format!("{}{ROWS_PATH}", mock_server.uri()))
            .with_commit_trigger(trigger);
        let state = State::with_config(config);
        let app = PodiumApp::new(state).manual_time_control(true);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Step frames until the fetch is no longer loading.
    pub async fn wait_for_load(&mut self) {
        for _ in 0..200 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(API_RESPONSE_WAIT_MS)).await;
            if !self.harness.state().state.ctx.state::<RecordsFetch>().is_loading() {
                // One more frame so the applied rows are rendered.
                self.harness.step();
                return;
            }
        }
        panic!("Timed out waiting for the records fetch");
    }
}

/// `count` athlete objects carrying an extra key the table must drop.
pub fn athletes(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "athlete": format!("Athlete {i}"),
                    "age": 20 + i % 10,
                    "country": if i % 3 == 0 { "Kenya" } else { "Norway" },
                    "year": 2000 + i,
                    "sport": "Athletics",
                })
            })
            .collect(),
    )
}
