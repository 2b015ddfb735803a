//! End-to-end keypad sessions driven through the input adapter.

use abacus::builder::CalculatorBuilder;
use abacus::config::EngineConfig;
use abacus::core::{parse_numeral, Operator};
use abacus::engine::{Calculator, Snapshot};
use abacus::input::{Command, InputError};
use std::sync::{Arc, Mutex};

fn press(calc: &mut Calculator, keys: &[&str]) {
    for key in keys {
        calc.execute(Command::from_key(key).unwrap());
    }
}

fn session(keys: &[&str]) -> Calculator {
    let mut calc = Calculator::new();
    press(&mut calc, keys);
    calc
}

#[test]
fn digits_form_a_number() {
    let calc = session(&["1", "2", "3"]);
    assert_eq!(calc.display(), "123");
}

#[test]
fn extra_decimal_points_are_ignored() {
    let calc = session(&["1", ".", "2", "."]);
    assert_eq!(calc.display(), "1.2");
}

#[test]
fn pressing_plus_twice_doubles() {
    let calc = session(&["5", "+", "+"]);

    assert_eq!(calc.display(), "10");
    assert_eq!(calc.history().texts(), vec!["5 + 5 = 10"]);
}

#[test]
fn divide_by_zero_falls_back_to_zero() {
    let calc = session(&["5", "÷", "0", "="]);

    assert_eq!(calc.display(), "0");
    assert_eq!(calc.history().texts(), vec!["5 ÷ 0 = 0"]);
}

#[test]
fn square_is_logged() {
    let calc = session(&["9", "x²"]);

    assert_eq!(calc.display(), "81");
    assert_eq!(calc.history().texts()[0], "9² = 81");
}

#[test]
fn memory_survives_clear() {
    let calc = session(&["7", "MS", "C", "MR"]);
    assert_eq!(calc.display(), "7");
}

#[test]
fn history_keeps_ten_most_recent() {
    let mut calc = Calculator::new();
    for i in 1..=12 {
        let digit = (i % 10).to_string();
        press(&mut calc, &["C", &digit, "x²"]);
    }

    let texts = calc.history().texts();
    assert_eq!(texts.len(), 10);
    assert_eq!(texts[0], "2² = 4");
    assert_eq!(texts[1], "1² = 1");
    assert_eq!(texts[2], "0² = 0");
    assert_eq!(texts[9], "3² = 9");
}

#[test]
fn clear_resets_pending_operation_only() {
    let mut calc = session(&["4", "MS", "×", "3", "=", "2", "+"]);
    assert!(calc.pending_summary().is_some());

    press(&mut calc, &["Escape"]);

    assert_eq!(calc.display(), "0");
    assert_eq!(calc.pending_summary(), None);
    assert_eq!(calc.memory(), 4.0);
    assert_eq!(calc.history().texts(), vec!["12 = 2 = 2", "4 × 3 = 12"]);
}

#[test]
fn keyboard_and_button_aliases_agree() {
    let keyboard = session(&["6", "*", "7", "Enter"]);
    let buttons = session(&["6", "×", "7", "="]);

    let (keyboard, buttons) = (keyboard.snapshot(), buttons.snapshot());
    assert_eq!(keyboard.display, buttons.display);
    assert_eq!(keyboard.pending, buttons.pending);
    assert_eq!(keyboard.memory_active, buttons.memory_active);
    assert_eq!(keyboard.history[0].text, buttons.history[0].text);
    assert_eq!(keyboard.display, "42");
}

#[test]
fn percentage_of_pending_operand() {
    let calc = session(&["2", "0", "0", "+", "1", "0", "%", "="]);

    assert_eq!(calc.display(), "200.1");
    assert_eq!(calc.history().texts(), vec!["200 + 0.1 = 200.1"]);
}

#[test]
fn floating_point_results_are_shown_verbatim() {
    let calc = session(&["0", ".", "1", "+", "0", ".", "2", "="]);
    assert_eq!(calc.display(), "0.30000000000000004");
}

#[test]
fn unguarded_unary_results_flow_into_operations() {
    let calc = session(&["0", "1/x", "+", "1", "="]);

    assert_eq!(calc.display(), "Infinity");
    assert_eq!(
        calc.history().texts(),
        vec!["Infinity + 1 = Infinity", "1/0 = Infinity"]
    );
}

#[test]
fn backspace_then_operator_uses_edited_value() {
    let calc = session(&["1", "2", "3", "Backspace", "-", "2", "="]);

    assert_eq!(calc.display(), "10");
    assert_eq!(calc.history().texts(), vec!["12 - 2 = 10"]);
}

#[test]
fn backspace_after_sign_toggle_leaves_bare_sign() {
    let calc = session(&["5", "±", "Backspace"]);

    assert_eq!(calc.display(), "-");
    assert!(parse_numeral(calc.display()).is_nan());
}

#[test]
fn unknown_keys_never_reach_the_engine() {
    assert_eq!(
        Command::from_key("Shift"),
        Err(InputError::UnknownKey("Shift".to_string()))
    );
}

#[test]
fn observer_receives_view_state() {
    let views: Arc<Mutex<Vec<Snapshot>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&views);

    let mut calc = CalculatorBuilder::new()
        .observer(move |snapshot| sink.lock().unwrap().push(snapshot.clone()))
        .build()
        .unwrap();

    calc.execute(Command::from_key("3").unwrap());
    calc.execute(Command::Operation(Operator::Multiply));

    let views = views.lock().unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[1].pending.as_deref(), Some("3 ×"));
    assert_eq!(views[1].display, "3");
}

#[test]
fn configured_history_limit_applies() {
    let config = EngineConfig::from_toml_str("history_limit = 2").unwrap();
    let mut calc = config.builder().build().unwrap();

    press(&mut calc, &["1", "+", "1", "=", "+", "1", "=", "+", "1", "="]);

    assert_eq!(calc.display(), "4");
    // an operator right after `=` finalizes the `=` first
    assert_eq!(calc.history().texts(), vec!["3 + 1 = 4", "3 = 3 = 3"]);
}
