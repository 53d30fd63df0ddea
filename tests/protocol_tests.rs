use auricle::protocol::{
    EvaluateAmazonRequest, EvaluateRequest, EvaluationResponse, Headphone, UseCaseWeight,
};
use auricle::usecase::UseCase;

#[test]
fn minimal_response_deserializes() {
    let json = r#"{"ranked_headphones": [{"model": "X100", "score": 0.82}]}"#;
    let response: EvaluationResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.ranked_headphones.len(), 1);
    let item = &response.ranked_headphones[0];
    assert_eq!(item.model, "X100");
    assert!(item.value_score.is_none());
    assert!(item.contributions.is_none());
    assert!(response.value_ranked_headphones.is_none());
    assert!(response.explanation.is_none());
}

#[test]
fn empty_object_is_a_valid_response() {
    let response: EvaluationResponse = serde_json::from_str("{}").unwrap();
    assert!(response.ranked_headphones.is_empty());
}

#[test]
fn contributions_preserve_json_key_order() {
    let json = r#"{
        "ranked_headphones": [{
            "model": "X100",
            "score": 0.8,
            "contributions": {"price": 0.5, "latency": 0.5, "battery_life": 0.2}
        }]
    }"#;
    let response: EvaluationResponse = serde_json::from_str(json).unwrap();
    let contributions = response.ranked_headphones[0]
        .contributions
        .as_ref()
        .unwrap();

    let keys: Vec<&str> = contributions.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["price", "latency", "battery_life"]);

    // And the order survives re-serialization.
    let round = serde_json::to_string(contributions).unwrap();
    assert!(round.find("price").unwrap() < round.find("latency").unwrap());
}

#[test]
fn use_case_names_serialize_snake_case() {
    let entry = UseCaseWeight {
        name: UseCase::WorkCalls,
        percentage: 33.5,
    };
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(json, r#"{"name":"work_calls","percentage":33.5}"#);

    let back: UseCaseWeight = serde_json::from_str(&json).unwrap();
    assert_eq!(back.name, UseCase::WorkCalls);
}

#[test]
fn evaluate_request_matches_wire_contract() {
    let request = EvaluateRequest {
        use_cases: vec![UseCaseWeight {
            name: UseCase::Gaming,
            percentage: 100.0,
        }],
        headphones: vec![Headphone {
            name: Some("X100".to_string()),
            price: Some(199.0),
            latency: Some(40.0),
            ..Default::default()
        }],
    };

    let value: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["use_cases"][0]["name"], "gaming");
    assert_eq!(value["use_cases"][0]["percentage"], 100.0);
    assert_eq!(value["headphones"][0]["price"], 199.0);
    // Unset specs are omitted, not serialized as null.
    assert!(value["headphones"][0].get("battery_life").is_none());
}

#[test]
fn amazon_request_carries_urls() {
    let request = EvaluateAmazonRequest {
        use_cases: vec![UseCaseWeight {
            name: UseCase::Travel,
            percentage: 100.0,
        }],
        amazon_urls: vec!["https://www.amazon.in/dp/B0EXAMPLE".to_string()],
    };
    let value: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["amazon_urls"][0], "https://www.amazon.in/dp/B0EXAMPLE");
}

#[test]
fn value_ranking_and_explanation_deserialize_when_present() {
    let json = r#"{
        "ranked_headphones": [{"model": "A", "score": 0.9}],
        "value_ranked_headphones": [
            {"model": "B", "score": 0.7, "value_score": 15.0, "price": 49.0}
        ],
        "explanation": {"reasoning": "Ranked for: Gaming (100%)."}
    }"#;
    let response: EvaluationResponse = serde_json::from_str(json).unwrap();

    let value_list = response.value_ranked_headphones.unwrap();
    assert_eq!(value_list[0].value_score, Some(15.0));
    assert_eq!(value_list[0].price, Some(49.0));
    assert!(response.explanation.unwrap().reasoning.contains("Gaming"));
}
