mod common;

use apidoc_query::autocomplete::{
    AutocompleteController, DEBOUNCE_DELAY, NavigationTarget, Phase, WidgetEvent, run_widget,
};
use apidoc_query::search::SearchQueryEngine;
use apidoc_query::{Category, Documentation};
use assert2::{check, let_assert};
use common::*;
use rstest::rstest;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

type Controller = AutocompleteController<CountingEngine<SearchQueryEngine>, RecordingWidget>;

fn controller(docs: &Documentation) -> Controller {
    AutocompleteController::new(
        CountingEngine::new(docs.engine().clone()),
        RecordingWidget::default(),
    )
}

/// Controller with the results for `query` already open.
fn opened(docs: &Documentation, query: &str) -> Controller {
    let mut controller = controller(docs);
    let now = Instant::now();
    controller.on_input(query, now);
    check!(controller.poll(now + DEBOUNCE_DELAY));
    controller
}

#[rstest]
fn test_keystrokes_within_quiet_period_run_one_query(docs: Documentation) {
    let mut controller = controller(&docs);
    let start = Instant::now();

    controller.on_input("us", start);
    controller.on_input("use", start + Duration::from_millis(50));
    controller.on_input("user", start + Duration::from_millis(100));
    check!(controller.state().pending_query() == Some("user"));

    // 200ms after the first keystroke, but only 100ms after the last
    check!(!controller.poll(start + Duration::from_millis(200)));
    check!(controller.engine().calls() == 0);

    check!(controller.poll(start + Duration::from_millis(250)));
    check!(controller.engine().queries() == ["user"]);
    check!(controller.phase() == Phase::Open);
    check!(controller.state().current_results().len() == 9);
    check!(controller.state().pending_query().is_none());
}

#[rstest]
#[case("")]
#[case("u")]
fn test_short_input_never_queries(docs: Documentation, #[case] text: &str) {
    let mut controller = controller(&docs);
    let start = Instant::now();

    controller.on_input(text, start);
    check!(!controller.poll(start + Duration::from_secs(1)));
    check!(controller.engine().calls() == 0);
    check!(controller.phase() == Phase::Closed);
}

#[rstest]
fn test_short_input_cancels_pending_and_closes(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    let now = Instant::now();

    controller.on_input("use", now);
    controller.on_input("u", now + Duration::from_millis(10));

    check!(controller.phase() == Phase::Closed);
    check!(controller.state().current_results().is_empty());
    check!(!controller.poll(now + Duration::from_secs(1)));
    check!(controller.engine().calls() == 1);
}

#[rstest]
fn test_clear_control_visibility(docs: Documentation) {
    let mut controller = controller(&docs);
    let now = Instant::now();

    controller.on_input("u", now);
    check!(controller.widget().clear_visible);
    controller.on_input("", now);
    check!(!controller.widget().clear_visible);
}

#[rstest]
fn test_arrow_navigation_wraps(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    let last = controller.state().current_results().len() - 1;

    check!(controller.on_arrow_down());
    check!(controller.state().selected_index() == Some(0));
    check!(controller.phase() == Phase::Navigating);

    check!(controller.on_arrow_up());
    check!(controller.state().selected_index() == Some(last));

    check!(controller.on_arrow_down());
    check!(controller.state().selected_index() == Some(0));
    check!(controller.widget().selected == [0, last, 0]);
}

#[rstest]
fn test_arrow_up_without_selection_selects_last(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    check!(controller.on_arrow_up());

    let_assert!(Some(entry) = controller.state().selected_entry());
    check!(entry.category == Category::Field);
    check!(entry.name == "role");
}

#[rstest]
fn test_arrows_ignored_when_closed(docs: Documentation) {
    let mut controller = controller(&docs);
    check!(!controller.on_arrow_down());
    check!(!controller.on_arrow_up());
    check!(controller.phase() == Phase::Closed);
}

#[rstest]
fn test_empty_results_show_empty_state(docs: Documentation) {
    let mut controller = opened(&docs, "zzz");

    check!(controller.phase() == Phase::Open);
    check!(controller.widget().shown == [0]);
    check!(!controller.on_arrow_down());
    check!(!controller.on_enter());
}

#[rstest]
fn test_enter_navigates_to_member(docs: Documentation) {
    let mut controller = opened(&docs, "findby");
    controller.on_arrow_down();
    check!(controller.on_enter());

    let_assert!([target] = controller.widget().navigated.as_slice());
    let_assert!(
        NavigationTarget::Member {
            category,
            package_name,
            type_name,
            member_name,
            ..
        } = target
    );
    check!(*category == Category::Method);
    check!(package_name == "com.acme.service");
    check!(type_name == "UserService");
    check!(member_name == "findById");
    check!(target.fragment() == "#com.acme.service.UserService.findById");

    check!(controller.phase() == Phase::Closed);
    check!(controller.widget().cleared == 1);
}

#[rstest]
fn test_enter_without_selection_does_nothing(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    check!(!controller.on_enter());
    check!(controller.phase() == Phase::Open);
    check!(controller.widget().navigated.is_empty());
}

#[rstest]
fn test_click_navigates_to_type(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    let_assert!(Some(repository) = controller.state().current_results().get(4).cloned());

    controller.handle(WidgetEvent::Activate(repository), Instant::now());

    let_assert!(
        [NavigationTarget::Type {
            package_name,
            simple_name,
            qualified_name
        }] = controller.widget().navigated.as_slice()
    );
    check!(package_name == "com.acme.service");
    check!(simple_name == "UserRepository");
    check!(qualified_name == "com.acme.service.UserRepository");
    check!(controller.phase() == Phase::Closed);
}

#[rstest]
fn test_hover_moves_selection(docs: Documentation) {
    let mut controller = opened(&docs, "user");

    check!(controller.on_item_hover(2));
    check!(controller.on_arrow_down());
    check!(controller.state().selected_index() == Some(3));
}

#[rstest]
fn test_escape_while_navigating_resets(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    controller.on_arrow_down();
    controller.on_arrow_down();

    controller.handle(WidgetEvent::Escape, Instant::now());

    check!(controller.phase() == Phase::Closed);
    check!(controller.state().selected_index().is_none());
    check!(controller.state().current_results().is_empty());
    check!(controller.widget().released_focus == 1);
    check!(controller.widget().navigated.is_empty());
}

#[rstest]
fn test_outside_interaction_closes(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    controller.handle(WidgetEvent::OutsideInteraction, Instant::now());

    check!(controller.phase() == Phase::Closed);
    check!(controller.widget().released_focus == 0);
}

#[rstest]
fn test_outside_interaction_cancels_pending(docs: Documentation) {
    let mut controller = controller(&docs);
    let now = Instant::now();

    controller.on_input("user", now);
    controller.on_outside_interaction();

    check!(!controller.poll(now + DEBOUNCE_DELAY));
    check!(controller.engine().calls() == 0);
}

#[rstest]
fn test_clear_control(docs: Documentation) {
    let mut controller = opened(&docs, "user");
    controller.handle(WidgetEvent::Clear, Instant::now());

    check!(controller.phase() == Phase::Closed);
    check!(controller.widget().cleared == 1);
    check!(!controller.widget().clear_visible);
    check!(controller.widget().focused == 1);
}

#[rstest]
fn test_focus_requeries(docs: Documentation) {
    let mut controller = controller(&docs);
    let now = Instant::now();

    controller.handle(WidgetEvent::Focus("u".into()), now);
    check!(controller.next_deadline().is_none());

    controller.handle(WidgetEvent::Focus("role".into()), now);
    check!(controller.next_deadline() == Some(now + DEBOUNCE_DELAY));
    check!(controller.poll(now + DEBOUNCE_DELAY));
    check!(controller.engine().queries() == ["role"]);
}

#[rstest]
fn test_custom_debounce_delay(docs: Documentation) {
    let mut controller = controller(&docs).with_debounce_delay(Duration::from_millis(20));
    let now = Instant::now();

    controller.on_input("user", now);
    check!(controller.poll(now + Duration::from_millis(20)));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_driver_debounces_keystrokes(docs: Documentation) {
    let (tx, rx) = mpsc::channel(16);
    let handle = tokio::spawn(run_widget(controller(&docs), rx, CancellationToken::new()));

    tx.send(WidgetEvent::Input("us".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(WidgetEvent::Input("use".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(WidgetEvent::Input("user".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    tx.send(WidgetEvent::ArrowDown).await.unwrap();
    drop(tx);

    let controller = handle.await.unwrap();
    check!(controller.engine().queries() == ["user"]);
    check!(controller.phase() == Phase::Navigating);
    check!(controller.widget().shown == [9]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_driver_shutdown_drops_pending_query(docs: Documentation) {
    let (tx, rx) = mpsc::channel(16);
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(run_widget(controller(&docs), rx, shutdown.clone()));

    tx.send(WidgetEvent::Input("user".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();

    let controller = handle.await.unwrap();
    check!(controller.engine().calls() == 0);
    check!(controller.state().pending_query().is_none());
    check!(controller.next_deadline().is_none());
    check!(controller.phase() == Phase::Closed);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_driver_escape_before_deadline(docs: Documentation) {
    let (tx, rx) = mpsc::channel(16);
    let handle = tokio::spawn(run_widget(controller(&docs), rx, CancellationToken::new()));

    tx.send(WidgetEvent::Input("user".into())).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    tx.send(WidgetEvent::Escape).await.unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    drop(tx);

    let controller = handle.await.unwrap();
    check!(controller.engine().calls() == 0);
    check!(controller.phase() == Phase::Closed);
}

#[rstest]
fn test_controller_from_documentation(docs: Documentation) {
    let mut controller = docs.controller(RecordingWidget::default());
    let now = Instant::now();

    controller.handle(WidgetEvent::Input("audit".into()), now);
    check!(controller.poll(now + DEBOUNCE_DELAY));
    controller.handle(WidgetEvent::ArrowDown, now);
    controller.handle(WidgetEvent::Enter, now);

    let_assert!([target] = controller.widget().navigated.as_slice());
    check!(target.qualified_name() == "com.acme.model.Audited");
    check!(target.type_name() == "Audited");
}
