use toycurve_algorithms::{CurveParameters, Point};
use toycurve_params::TOY_P17;
use toycurve_pke::{run_exchange, Domain, ExchangeInput, ExchangeTranscript};

#[test]
fn test_transcript_json_round_trip() {
    let transcript = run_exchange(&ExchangeInput::from_constants(&TOY_P17, 3, 5, 5)).unwrap();
    let json = serde_json::to_string(&transcript).unwrap();
    let decoded: ExchangeTranscript = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, transcript);
}

#[test]
fn test_point_json_shape() {
    let json = serde_json::to_value(Point::affine(10, 6)).unwrap();
    assert_eq!(json, serde_json::json!({ "affine": { "x": 10, "y": 6 } }));
    let json = serde_json::to_value(Point::Infinity).unwrap();
    assert_eq!(json, serde_json::json!("infinity"));
}

#[test]
fn test_input_from_toml() {
    let input: ExchangeInput = toml::from_str(
        r#"
        p = 17
        a = 2
        b = 2
        generator_x = 5
        generator_y = 1
        private_a = 3
        private_b = 5
        message = 5
        "#,
    )
    .unwrap();
    assert_eq!(input, ExchangeInput::from_constants(&TOY_P17, 3, 5, 5));
}

#[test]
fn test_input_missing_field() {
    let result: Result<ExchangeInput, _> = toml::from_str("p = 17\na = 2\nb = 2\n");
    assert!(result.is_err());
}

#[test]
fn test_curve_deserialization_validates() {
    let err = serde_json::from_str::<CurveParameters>(r#"{"p":0,"a":5,"b":7}"#).unwrap_err();
    assert!(err.to_string().contains("modulus must be at least 2"), "{}", err);

    let curve: CurveParameters = serde_json::from_str(r#"{"p":17,"a":-15,"b":40}"#).unwrap();
    assert_eq!((curve.a(), curve.b()), (2, 6));
}

#[test]
fn test_domain_deserialization_validates() {
    let curve = r#"{"p":17,"a":2,"b":2}"#;

    let domain: Domain =
        serde_json::from_str(&format!(r#"{{"curve":{},"generator":{{"affine":{{"x":5,"y":1}}}}}}"#, curve))
            .unwrap();
    assert_eq!(domain, Domain::from_constants(&TOY_P17).unwrap());

    let at_infinity = format!(r#"{{"curve":{},"generator":"infinity"}}"#, curve);
    assert!(serde_json::from_str::<Domain>(&at_infinity).is_err());

    let off_curve = format!(r#"{{"curve":{},"generator":{{"affine":{{"x":5,"y":2}}}}}}"#, curve);
    let err = serde_json::from_str::<Domain>(&off_curve).unwrap_err();
    assert!(err.to_string().contains("Point (5,2) is not on the curve"), "{}", err);

    // No point of y² = x³ + 2x + 2 mod 3 exists to serve as a generator
    let empty = r#"{"curve":{"p":3,"a":2,"b":2},"generator":{"affine":{"x":0,"y":0}}}"#;
    assert!(serde_json::from_str::<Domain>(empty).is_err());
}
