//! Pagination bar against a loaded table.
//!
//! The bar sits below the `TableBuilder`, so its buttons can be clicked
//! directly.

mod common;

use common::{TestCtx, athletes};
use kittest::Queryable;
use podium_business::TableController;
use wiremock::ResponseTemplate;

fn page_index(ctx: &TestCtx<'_>) -> usize {
    ctx.harness()
        .state()
        .state
        .ctx
        .state::<TableController>()
        .pagination()
        .page_index
}

#[tokio::test]
async fn test_next_and_previous_buttons() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200).set_body_json(athletes(25))).await;
    ctx.wait_for_load().await;

    ctx.harness_mut().get_by_label(">").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    assert_eq!(page_index(&ctx), 1);
    assert!(ctx.harness().query_by_label("Page 2 of 3").is_some());

    ctx.harness_mut().get_by_label("<").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    assert_eq!(page_index(&ctx), 0);
    assert!(ctx.harness().query_by_label("Page 1 of 3").is_some());
}

#[tokio::test]
async fn test_next_is_noop_on_last_page() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200).set_body_json(athletes(25))).await;
    ctx.wait_for_load().await;

    ctx.harness_mut()
        .state_mut()
        .state
        .ctx
        .state_mut::<TableController>()
        .set_page_index(5);
    ctx.harness_mut().step();
    assert!(ctx.harness().query_by_label("Page 3 of 3").is_some());

    ctx.harness_mut().get_by_label(">").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    assert_eq!(page_index(&ctx), 2);
    let controller = ctx.harness().state().state.ctx.state::<TableController>();
    assert!(!controller.can_next_page());
    assert_eq!(controller.page_rows().len(), 5);
}

#[tokio::test]
async fn test_go_to_page_box_shows_current_page() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200).set_body_json(athletes(25))).await;
    ctx.wait_for_load().await;
    assert!(ctx.harness().query_by_value("1").is_some());

    ctx.harness_mut().get_by_label(">").click();
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    assert_eq!(page_index(&ctx), 1);
    assert!(ctx.harness().query_by_value("2").is_some());
    assert!(ctx.harness().query_by_value("1").is_none());
}
