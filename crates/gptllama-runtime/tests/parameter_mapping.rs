//! Integration tests for building llama.cpp argument vectors from requests.

use gptllama_core::{
    DefaultParameterSet, FieldTranslationTable, OperatorConfig, RecognizedUserArguments,
    RequestParameters, UserArgPolicy,
};
use gptllama_runtime::{ArgsError, LlamaCommandBuilder, ParameterMapper};
use serde_json::json;

const DEFAULT_ARGS: [&str; 14] = [
    "--temp",
    "0.7",
    "--n_predict",
    "512",
    "--top_p",
    "0.1",
    "--top_k",
    "40",
    "-b",
    "512",
    "-c",
    "2048",
    "--repeat_penalty",
    "1.1764705882352942",
];

fn mapper(tokens: &[&str]) -> ParameterMapper {
    ParameterMapper::new(OperatorConfig::new(
        tokens.iter().copied(),
        UserArgPolicy::Reject,
    ))
}

#[test]
fn test_defaults_followed_by_operator_flags() {
    let args = mapper(&["threads", "8"])
        .map(&RequestParameters::default())
        .unwrap();

    let mut expected: Vec<&str> = DEFAULT_ARGS.to_vec();
    expected.extend(["--threads", "8"]);
    assert_eq!(args.into_inner(), expected);
}

#[test]
fn test_scenario_temperature_and_max_tokens() {
    let args = mapper(&[])
        .map_json(&json!({"temperature": 0.2, "max_tokens": 100}).to_string())
        .unwrap();

    assert_eq!(args.value_of("--temp"), Some("0.2"));
    assert_eq!(args.value_of("--n_predict"), Some("100"));
    for flag in ["--top_p", "--top_k", "-b", "-c", "--repeat_penalty"] {
        let default = DefaultParameterSet::standard();
        assert_eq!(args.value_of(flag), default.get(flag), "flag {flag}");
    }
    assert_eq!(args.len(), DEFAULT_ARGS.len());
}

#[test]
fn test_each_flag_appears_once() {
    let body = json!({
        "model": "gpt-3.5-turbo",
        "messages": [{"role": "user", "content": "hi"}],
        "temperature": 1.3,
        "top_p": 0.95,
        "max_tokens": 256,
        "stop": ["\n", "User:"]
    });
    let args = mapper(&["mlock"]).map_json(&body.to_string()).unwrap();

    for flag in [
        "--temp",
        "--n_predict",
        "--top_p",
        "--top_k",
        "-b",
        "-c",
        "--repeat_penalty",
        "--reverse-prompt",
        "--mlock",
    ] {
        assert_eq!(args.count(flag), 1, "flag {flag}");
    }
    assert_eq!(args.value_of("--top_p"), Some("0.95"));
    assert_eq!(args.value_of("--reverse-prompt"), Some("\n,User:"));
}

#[test]
fn test_falsy_values_never_appear() {
    let body = json!({"temperature": 0, "top_p": null, "stop": "", "max_tokens": 0});
    let args = mapper(&[]).map_json(&body.to_string()).unwrap();

    assert!(!args.contains("--temp"));
    assert!(!args.contains("--n_predict"));
    assert!(!args.contains("--reverse-prompt"));
    // null means "not sent", so the default survives
    assert_eq!(args.value_of("--top_p"), Some("0.1"));
    assert!(args.iter().all(|token| !token.is_empty()));
}

#[test]
fn test_mapping_is_idempotent() {
    let mapper = mapper(&["threads", "8", "mlock"]);
    let request = RequestParameters::from_json_str(r####"{"temperature": 0.4, "stop": "###"}"####)
        .unwrap();

    let first = mapper.map(&request).unwrap();
    let second = mapper.map(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_invalid_operator_args_rejected_per_request() {
    let err = mapper(&["threads", "abc"])
        .map(&RequestParameters::default())
        .unwrap_err();
    assert!(matches!(err, ArgsError::InvalidUserArgs(_)));
    assert_eq!(
        err.to_string(),
        "Args Error: threads expects a number, not string"
    );
}

#[test]
fn test_invalid_operator_args_ignored_when_lenient() {
    let mapper = ParameterMapper::new(OperatorConfig::new(
        ["threads", "abc"],
        UserArgPolicy::Ignore,
    ));
    let args = mapper.map(&RequestParameters::default()).unwrap();
    assert_eq!(args.into_inner(), DEFAULT_ARGS.to_vec());
}

#[test]
fn test_custom_tables() {
    let mapper = ParameterMapper::with_tables(
        OperatorConfig::new(["seed", "42"], UserArgPolicy::Reject),
        DefaultParameterSet::from_pairs([("--ctx-size", "4096")]).unwrap(),
        FieldTranslationTable::from_pairs([("max_tokens", "--n-predict")]).unwrap(),
        RecognizedUserArguments::from_pairs([("seed", gptllama_core::ValueKind::Numeric)])
            .unwrap(),
    );
    let args = mapper
        .map_json(r#"{"max_tokens": 32, "temperature": 0.1}"#)
        .unwrap();
    assert_eq!(
        args.into_inner(),
        vec!["--ctx-size", "4096", "--n-predict", "32", "--seed", "42"]
    );
}

#[test]
fn test_command_from_mapped_arguments() {
    let args = mapper(&["threads", "8"])
        .map(&RequestParameters::default())
        .unwrap();
    let cmd = LlamaCommandBuilder::new("/opt/llama.cpp/main")
        .model("/models/7B/ggml-model-q4_0.bin")
        .args(args)
        .build();

    let rendered: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(&rendered[..2], ["-m", "/models/7B/ggml-model-q4_0.bin"]);
    assert_eq!(&rendered[rendered.len() - 2..], ["--threads", "8"]);
}
