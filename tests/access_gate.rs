//! End-to-end behavior of the access gate over in-memory storage and history.

use paygate::gate::{
    Decision, GateConfig, GuardSession, GuardState, History, KeyValueStorage, Location,
    MemoryHistory, MemoryStorage, NavigationGuard, StorageVerificationRepository,
    VerificationWriter,
};
use std::rc::Rc;

const ACCESS: &str = "/sale/buy-course/course/access";
const PAYMENT: &str = "/sale/buy-course/course/payment";

struct Browser {
    config: GateConfig,
    storage: MemoryStorage,
    repository: StorageVerificationRepository<MemoryStorage>,
    history: Rc<MemoryHistory>,
}

impl Browser {
    fn new() -> Self {
        let config = GateConfig::default();
        let storage = MemoryStorage::new();
        let repository = StorageVerificationRepository::with_config(storage.clone(), &config);
        let history = Rc::new(MemoryHistory::new(Location::parse("/")));
        Self {
            config,
            storage,
            repository,
            history,
        }
    }

    fn visit(&self, href: &str) -> GuardSession<MemoryHistory> {
        let location = Location::parse(href);
        self.history.push(&location);
        GuardSession::acquire(
            location,
            &self.repository,
            Rc::clone(&self.history),
            &self.config,
        )
    }
}

#[test]
fn verified_order_renders_protected_content() {
    let browser = Browser::new();
    browser
        .storage
        .set_item("verifiedPayment_ORD123", "true")
        .ok();

    let session = browser.visit(&format!("{ACCESS}?order_id=ORD123"));

    assert_eq!(session.state(), GuardState::Admitted);
    assert!(matches!(session.decision(), Decision::Admit { .. }));
    assert_eq!(browser.history.current().path(), ACCESS);
}

#[test]
fn unverified_order_redirects_to_payment() {
    let browser = Browser::new();
    browser
        .storage
        .set_item("verifiedPayment_ORD123", "true")
        .ok();

    let session = browser.visit(&format!("{ACCESS}?order_id=ORD999"));

    assert_eq!(session.state(), GuardState::Denied);
    assert_eq!(browser.history.current(), Location::parse(PAYMENT));
    // The denied attempt replaced its own entry.
    assert!(
        browser
            .history
            .entries()
            .iter()
            .all(|entry| entry.path() != ACCESS)
    );
}

#[test]
fn missing_order_id_behaves_like_unverified() {
    let browser = Browser::new();

    let missing = browser.visit(ACCESS);
    let unknown = browser.visit(&format!("{ACCESS}?order_id=ORD999"));

    assert_eq!(missing.state(), unknown.state());
    assert_eq!(
        missing.decision().redirect_target(),
        unknown.decision().redirect_target()
    );
}

#[test]
fn back_navigation_is_countered_while_mounted() {
    let browser = Browser::new();
    browser.visit(PAYMENT);
    browser
        .repository
        .confirm_payment("ORD123")
        .expect("record written");

    let session = browser.visit(&format!("{ACCESS}?order_id=ORD123"));
    let guarded = session.location().clone();

    for _ in 0..3 {
        browser.history.back();
        assert_eq!(browser.history.current(), guarded);
    }

    drop(session);

    browser.history.back();
    browser.history.back();
    assert_eq!(browser.history.current(), Location::parse(PAYMENT));
}

#[test]
fn jump_across_several_entries_is_countered() {
    let browser = Browser::new();
    browser.visit("/courses");
    browser.visit(PAYMENT);
    browser
        .repository
        .confirm_payment("ORD123")
        .expect("record written");

    let session = browser.visit(&format!("{ACCESS}?order_id=ORD123"));
    let guarded = session.location().clone();

    browser.history.go(-3);
    assert_eq!(browser.history.current(), guarded);
    assert!(session.is_trap_armed());

    browser.history.go(-2);
    assert_eq!(browser.history.current(), guarded);
}

#[test]
fn payment_flow_then_guard() {
    let browser = Browser::new();
    let order_id = browser
        .repository
        .confirm_payment("ORD555")
        .expect("record written");
    browser
        .repository
        .record_verified(&order_id)
        .expect("rewrite is harmless");

    let target = browser.config.access_location(&order_id);
    let session = browser.visit(&target.href());

    assert!(session.is_admitted());
    assert_eq!(browser.storage.len(), 1);
}

#[test]
fn evaluation_is_repeatable_for_same_inputs() {
    let browser = Browser::new();
    browser
        .storage
        .set_item("verifiedPayment_ORD123", "true")
        .ok();
    let guard = NavigationGuard::new(&browser.repository, &browser.config);

    for href in [
        format!("{ACCESS}?order_id=ORD123"),
        format!("{ACCESS}?order_id=ORD999"),
        ACCESS.to_string(),
    ] {
        let location = Location::parse(&href);
        assert_eq!(guard.evaluate(&location), guard.evaluate(&location));
    }
}
