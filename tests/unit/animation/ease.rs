use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn piecewise_values_match_closed_forms() {
    assert_eq!(Ease::InQuad.apply(0.5), 0.25);
    assert_eq!(Ease::OutCirc.apply(0.5), 0.75f64.sqrt());
    assert_eq!(Ease::InExpo.apply(0.5), 2f64.powi(-5));
    assert_eq!(Ease::OutExpo.apply(0.5), 1.0 - 2f64.powi(-5));
    assert_eq!(Ease::InOutQuad.apply(0.25), 0.125);
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert_eq!(Ease::InOutQuad.apply(0.75), 0.875);
    assert_eq!(Ease::InOutQuart.apply(0.25), 0.03125);
    assert_eq!(Ease::InOutQuart.apply(0.5), 0.5);
    assert_eq!(Ease::InOutQuart.apply(0.75), 0.96875);
}

#[test]
fn out_of_range_input_is_not_clamped() {
    assert_eq!(Ease::Linear.apply(2.0), 2.0);
    assert_eq!(Ease::InQuad.apply(-1.0), 1.0);
    assert_eq!(Ease::InExpo.apply(1.5), 32.0);
    assert!(Ease::OutCirc.apply(2.5).is_nan());
}

#[test]
fn names_round_trip_through_from_str_and_serde() {
    for ease in Ease::ALL {
        assert_eq!(ease.as_str().parse::<Ease>().unwrap(), ease);
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.as_str()));
    }
    assert_eq!("In-Out-Quart".parse::<Ease>().unwrap(), Ease::InOutQuart);
    assert!("bounce".parse::<Ease>().is_err());
}
