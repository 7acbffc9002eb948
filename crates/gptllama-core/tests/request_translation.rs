//! Integration tests for request parsing against the fixed tables.

use gptllama_core::{
    DefaultParameterSet, FieldTranslationTable, ParamValue, RequestParameters, StopCondition,
};
use serde_json::json;

#[test]
fn test_openai_chat_payload() {
    let body = json!({
        "model": "gpt-3.5-turbo",
        "messages": [
            {"role": "system", "content": "You are a helpful assistant."},
            {"role": "user", "content": "How are you?"}
        ],
        "temperature": 0.8,
        "stop": ["\n", "User:"],
        "stream": true
    });
    let params = RequestParameters::from_json_value(body).unwrap();

    assert_eq!(params.temperature, Some(0.8));
    assert_eq!(
        params.stop,
        Some(StopCondition::Multiple(vec![
            "\n".to_string(),
            "User:".to_string()
        ]))
    );
    assert!(params.max_tokens.is_none());
}

#[test]
fn test_every_field_has_a_flag() {
    let params = RequestParameters {
        temperature: Some(0.1),
        stop: Some(StopCondition::Single("###".to_string())),
        max_tokens: Some(8.0),
        top_p: Some(0.2),
    };
    let translation = FieldTranslationTable::standard();

    let flags: Vec<_> = params
        .fields()
        .into_iter()
        .filter_map(|(field, _)| translation.flag_for(field))
        .collect();
    assert_eq!(
        flags,
        vec!["--temp", "--reverse-prompt", "--n_predict", "--top_p"]
    );
}

#[test]
fn test_defaults_are_truthy_text() {
    for (flag, value) in DefaultParameterSet::standard().iter() {
        assert!(flag.starts_with('-'));
        assert!(!ParamValue::from(value).is_falsy(), "default for {flag}");
    }
}
