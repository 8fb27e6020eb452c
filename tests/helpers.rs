use pixfind::{decimal_calc, join_valid, standard_num, CalcOp};

#[test]
fn decimal_calc_avoids_float_drift() {
    assert_ne!(0.1 + 0.2, 0.3);
    assert_eq!(decimal_calc(&[0.1, 0.2], CalcOp::Add, true), 0.3);
    assert_eq!(decimal_calc(&[0.1, 0.2], CalcOp::default(), false), 0.0);
}

#[test]
fn decimal_calc_uses_widest_precision() {
    assert_eq!(decimal_calc(&[1.005, 2.1, 3.0], CalcOp::Add, true), 6.105);
    assert_eq!(decimal_calc(&[0.3, 0.1], CalcOp::Sub, true), 0.2);
    assert_eq!(decimal_calc(&[2.0, 0.5], CalcOp::Add, false), 3.0);
    assert_eq!(decimal_calc(&[-2.0, 0.5], CalcOp::Add, false), -1.0);
}

#[test]
fn decimal_calc_handles_integers_and_single_operands() {
    assert_eq!(decimal_calc(&[4.0, 5.0, 6.0], CalcOp::Add, true), 15.0);
    assert_eq!(decimal_calc(&[1.25], CalcOp::Sub, true), 1.25);
    assert_eq!(decimal_calc(&[1.25], CalcOp::Sub, false), 1.0);
}

#[test]
fn standard_num_clamps_to_bounds() {
    assert_eq!(standard_num(15.0, Some(10.0), Some(0.0)), 10.0);
    assert_eq!(standard_num(-5.0, Some(10.0), Some(0.0)), 0.0);
    assert_eq!(standard_num(5.0, Some(10.0), Some(0.0)), 5.0);
    assert_eq!(standard_num(5.0, None, None), 5.0);
}

#[test]
fn join_valid_defaults_to_space() {
    assert_eq!(join_valid(["card", "", "selected"], None), "card selected");
    assert_eq!(join_valid(["a", "b"], Some(" | ")), "a | b");
    assert_eq!(join_valid(Vec::<String>::new(), None), "");
    assert_eq!(join_valid([false, true], None), "true");
}

#[test]
fn decimal_calc_stays_finite_for_tiny_operands() {
    assert_eq!(decimal_calc(&[1.0, 1e-320], CalcOp::Add, false), 1.0);
    assert_eq!(decimal_calc(&[1e10, 1e-300], CalcOp::Add, false), 1e10);
    assert_eq!(decimal_calc(&[0.5, 1e-310], CalcOp::Add, true), 0.5);
    assert_eq!(decimal_calc(&[2.25, 1e-12], CalcOp::Sub, true), 2.25);
}

#[test]
fn decimal_calc_stays_finite_when_scaling_overflows() {
    let result = decimal_calc(&[1.7e308, 0.125], CalcOp::Add, true);
    assert!(result.is_finite());
    assert_eq!(result, 1.7e308);
}
