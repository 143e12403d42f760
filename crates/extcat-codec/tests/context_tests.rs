use std::collections::BTreeMap;
use std::fs;

use chrono::{DateTime, TimeZone, Utc};
use extcat_codec::{Error, SerializationContext, Syntax, one_or_many};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Release {
    platform_id: String,
    released_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "one_or_many::deserialize")]
    streams: Vec<String>,
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

fn release() -> Release {
    let mut properties = BTreeMap::new();
    properties.insert("zulu".into(), "last".into());
    properties.insert("alpha".into(), "first".into());
    Release {
        platform_id: "io.quarkus.platform".into(),
        released_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        streams: vec!["3.8".into(), "3.9".into()],
        properties,
    }
}

#[test]
fn test_roundtrip_json_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.json");
    let ctx = SerializationContext::new();

    ctx.serialize(&release(), &path).unwrap();
    let loaded: Release = ctx.deserialize(&path).unwrap();

    assert_eq!(loaded, release());
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"platform-id\""), "{text}");
    assert!(text.contains("2024-03-01T12:30:00Z"), "{text}");
}

#[test]
fn test_roundtrip_yaml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.yaml");
    let ctx = SerializationContext::new();

    ctx.serialize(&release(), &path).unwrap();
    let loaded: Release = ctx.deserialize(&path).unwrap();

    assert_eq!(loaded, release());
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("platform-id: io.quarkus.platform"), "{text}");
}

#[test]
fn test_serialize_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let ctx = SerializationContext::new();

    for name in ["a.json", "a.yaml"] {
        let first = temp.path().join(format!("1-{name}"));
        let second = temp.path().join(format!("2-{name}"));
        ctx.serialize(&release(), &first).unwrap();
        ctx.serialize(&release(), &second).unwrap();
        assert_eq!(
            fs::read(&first).unwrap(),
            fs::read(&second).unwrap(),
            "{name} output differs between runs"
        );
    }
}

#[test]
fn test_properties_are_written_alphabetically() {
    let ctx = SerializationContext::new();
    let text = ctx.yaml().to_string(&release()).unwrap();

    let order: Vec<usize> = ["platform-id", "properties", "released-at", "streams"]
        .iter()
        .map(|k| text.find(&format!("{k}:")).unwrap())
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert!(text.find("alpha:").unwrap() < text.find("zulu:").unwrap());
}

#[test]
fn test_serialize_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("deeper").join("release.yml");

    SerializationContext::new().serialize(&release(), &path).unwrap();

    assert!(path.exists());
}

#[test]
fn test_deserialize_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    let err = SerializationContext::new()
        .deserialize::<Release>(&path)
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.yaml");
    fs::write(
        &path,
        "platform-id: p\nreleased-at: 2024-03-01T12:30:00Z\nfuture-field:\n  nested: true\n",
    )
    .unwrap();

    let loaded: Release = SerializationContext::new().deserialize(&path).unwrap();

    assert_eq!(loaded.platform_id, "p");
    assert!(loaded.streams.is_empty());
}

#[test]
fn test_single_value_accepted_for_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.json");
    fs::write(
        &path,
        r#"{
  // hand-written
  "platform-id": "p",
  "released-at": "2024-03-01T12:30:00Z",
  "streams": "3.8"
}"#,
    )
    .unwrap();

    let loaded: Release = SerializationContext::new().deserialize(&path).unwrap();

    assert_eq!(loaded.streams, vec!["3.8".to_string()]);
}

#[test]
fn test_empty_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.yaml");
    fs::write(&path, "").unwrap();

    let err = SerializationContext::new()
        .deserialize::<Release>(&path)
        .unwrap_err();

    assert!(matches!(err, Error::Parse { syntax: Syntax::Yaml, .. }), "{err:?}");
}

/// Every field optional, so a document without content would otherwise
/// decode to the default.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct Settings {
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

#[rstest]
#[case("# nothing but a comment\n")]
#[case("   \n\t\n  # indented comment\n\n")]
#[case("---\n# header only\n")]
fn test_comment_only_yaml_file_is_parse_error(#[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.yaml");
    fs::write(&path, content).unwrap();

    let err = SerializationContext::new()
        .deserialize::<Settings>(&path)
        .unwrap_err();

    assert!(matches!(err, Error::Parse { syntax: Syntax::Yaml, .. }), "{err:?}");
}

#[test]
fn test_comment_only_json_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(&path, "// nothing\n/* at all */\n").unwrap();

    let err = SerializationContext::new()
        .deserialize::<Settings>(&path)
        .unwrap_err();

    assert!(matches!(err, Error::Parse { syntax: Syntax::Json, .. }), "{err:?}");
}

#[test]
fn test_malformed_json_reports_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.json");
    fs::write(&path, "{\n  \"platform-id\": \"p\",\n  oops\n}").unwrap();

    let err = SerializationContext::new()
        .deserialize::<Release>(&path)
        .unwrap_err();

    match err {
        Error::Parse { syntax, line, .. } => {
            assert_eq!(syntax, Syntax::Json);
            assert_eq!(line, Some(3));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_explicit_codec_overrides_suffix() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release.data");
    let ctx = SerializationContext::new();

    ctx.serialize_with(ctx.json(), &release(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with('{'));
    let loaded: Release = ctx.deserialize_with(ctx.json(), &path).unwrap();
    assert_eq!(loaded, release());
}

#[test]
fn test_reader_defaults_to_json() {
    let ctx = SerializationContext::new();
    let mut buf = Vec::new();
    ctx.serialize_to_writer(&release(), &mut buf).unwrap();

    let loaded: Release = ctx.deserialize_reader(buf.as_slice()).unwrap();

    assert_eq!(loaded, release());
}

#[test]
fn test_write_into_file_blocking_parent_fails_with_io() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "file").unwrap();

    let err = SerializationContext::new()
        .serialize(&release(), &blocker.join("release.yaml"))
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }), "{err:?}");
}
