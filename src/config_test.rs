use super::*;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches these vars concurrently.
unsafe fn clear_app_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SIMULATED_DELAY_MS");
        std::env::remove_var("MOCK_SEED");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_app_env() };

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.delays, SimulatedDelays::default());
    assert_eq!(cfg.delays.audit, Duration::from_millis(3000));
    assert_eq!(cfg.mock_seed, None);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("SIMULATED_DELAY_MS", "25");
        std::env::set_var("MOCK_SEED", " 7 ");
    }

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.delays, SimulatedDelays::uniform(Duration::from_millis(25)));
    assert_eq!(cfg.mock_seed, Some(7));

    unsafe { clear_app_env() };
}

#[test]
fn from_env_invalid_values_fall_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_app_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("SIMULATED_DELAY_MS", "-1");
        std::env::set_var("MOCK_SEED", "abc");
    }

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.delays, SimulatedDelays::default());
    assert_eq!(cfg.mock_seed, None);

    unsafe { clear_app_env() };
}

#[test]
fn env_parse_unset_returns_default() {
    assert_eq!(env_parse("__TEST_ENV_PARSE_UNSET_4411__", 12_u32), 12);
}

#[test]
fn none_delays_are_zero() {
    let delays = SimulatedDelays::none();
    assert_eq!(delays.dashboard, Duration::ZERO);
    assert_eq!(delays.competitors, Duration::ZERO);
}
