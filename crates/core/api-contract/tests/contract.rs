use api_contract::{
    AhpRequest, AhpResponse, EvaluateRequest, SaveSchemeRequest, SchemePayloadDto,
    SetActiveSchemeRequest,
};
use domain::{MetricValue, WeightMap, WeightMethod};
use serde_json::Value;

#[test]
fn evaluate_request_accepts_camel_case() {
    let payload = r#"{
        "systemId": "traction",
        "indicatorIds": ["1.1", "2.1"],
        "devices": [
            {
                "id": "dev-1",
                "name": "1# 主变",
                "systemId": "traction",
                "metrics": [
                    { "indicatorId": "1.1", "value": 72.5 },
                    { "indicatorId": "2.1", "value": "良好" }
                ]
            }
        ]
    }"#;
    let req: EvaluateRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.system_id, "traction");
    assert_eq!(req.indicator_ids, vec!["1.1", "2.1"]);
    assert!(req.scheme_id.is_none());
    assert!(req.weights.is_none());
    assert_eq!(req.devices[0].metrics[0].value, MetricValue::Number(72.5));
    assert_eq!(
        req.devices[0].metrics[1].value,
        MetricValue::Text("良好".to_string())
    );
}

#[test]
fn ahp_request_defaults_to_not_saving() {
    let payload = r#"{"indicatorIds":["a","b"],"matrix":[[1,3],[0.3333,1]]}"#;
    let req: AhpRequest = serde_json::from_str(payload).expect("parse");
    assert!(!req.save);
    assert_eq!(req.matrix[0][1], 3.0);
}

#[test]
fn ahp_response_is_camel_case() {
    let response = AhpResponse {
        weights: WeightMap::from([("a".to_string(), 0.75), ("b".to_string(), 0.25)]),
        lambda_max: 2.0,
        consistency_index: 0.0,
        consistency_ratio: 0.0,
        consistent: true,
        iterations: 3,
        scheme: None,
    };
    let value = serde_json::to_value(response).expect("serialize");
    assert!(value.get("lambdaMax").is_some());
    assert!(value.get("consistencyRatio").is_some());
    assert!(value.get("lambda_max").is_none());
    assert_eq!(value["weights"]["a"], Value::from(0.75));
}

#[test]
fn save_scheme_defaults_to_manual() {
    let payload = r#"{"name":"专家打分","indicatorWeights":{"1.1":2,"2.1":1}}"#;
    let req: SaveSchemeRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.method, WeightMethod::Manual);
    assert!(req.id.is_none());
    assert_eq!(req.indicator_weights["1.1"], 2.0);
}

#[test]
fn scheme_requests_use_camel_case() {
    let req: SetActiveSchemeRequest =
        serde_json::from_str(r#"{"schemeId":"s1"}"#).expect("parse");
    assert_eq!(req.scheme_id, "s1");

    let payload: SchemePayloadDto = serde_json::from_str(r#"{"payload":"[]"}"#).expect("parse");
    assert_eq!(payload.payload, "[]");
}
