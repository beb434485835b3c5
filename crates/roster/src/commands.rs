//! One-shot subcommands: run a query or list facets and print the result.

use serde::Serialize;
use serde_json::{Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;

use crate::config::{ListArgs, OutputArgs, OutputFormat};
use crate::facets;
use crate::pipeline;
use crate::response::{ApplicationTypesResponse, SourcesResponse};
use crate::source::DataSource;

/// Runs the listing pipeline once, exactly as `/api/candidates` would.
pub fn list(source: &dyn DataSource, args: &ListArgs) -> anyhow::Result<String> {
    let params = args.to_params()?;
    let records = source.load()?;
    render(&pipeline::run(&records, &params), args.output.output)
}

pub fn sources(source: &dyn DataSource, args: OutputArgs) -> anyhow::Result<String> {
    let records = source.load()?;
    let body = SourcesResponse {
        sources: facets::sources(&records),
    };
    render(&body, args.output)
}

pub fn application_types(source: &dyn DataSource, args: OutputArgs) -> anyhow::Result<String> {
    let records = source.load()?;
    let body = ApplicationTypesResponse {
        application_type: facets::application_types(&records),
    };
    render(&body, args.output)
}

/// Serializes `data` in the requested format.
pub fn render<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(&to_yaml(serde_json::to_value(data)?))?,
    })
}

/// Rebuilds a JSON tree as YAML. Numbers are kept at arbitrary precision, so
/// their serde form is an opaque wrapper and has to be mapped by hand.
fn to_yaml(value: JsonValue) -> YamlValue {
    match value {
        JsonValue::Null => YamlValue::Null,
        JsonValue::Bool(b) => YamlValue::Bool(b),
        JsonValue::Number(n) => yaml_number(&n),
        JsonValue::String(s) => YamlValue::String(s),
        JsonValue::Array(items) => YamlValue::Sequence(items.into_iter().map(to_yaml).collect()),
        JsonValue::Object(map) => YamlValue::Mapping(
            map.into_iter()
                .map(|(key, value)| (YamlValue::String(key), to_yaml(value)))
                .collect(),
        ),
    }
}

/// Integers wider than 64 bits become strings so no digit is lost.
fn yaml_number(n: &Number) -> YamlValue {
    if let Some(i) = n.as_i64() {
        return YamlValue::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return YamlValue::Number(u.into());
    }
    let literal = n.to_string();
    match n.as_f64() {
        Some(f) if literal.contains(['.', 'e', 'E']) => YamlValue::Number(f.into()),
        _ => YamlValue::String(literal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use clap::Parser;

    use crate::config::{Cli, Command};
    use crate::error::{DataSourceError, ValidationError};
    use crate::model::Candidate;
    use crate::source::InMemorySource;
    use serde_json::json;

    fn source() -> InMemorySource {
        let records: Vec<Candidate> = serde_json::from_value(json!([
            {"name": "Ana", "position": "SRE", "company": "Initech", "application_type": "inbound",
             "source": "indeed", "job_id": "J-1", "last_activity": "2024-02-01"},
            {"name": "ben", "position": "Designer", "company": "Acme", "application_type": "referral",
             "source": "linkedin", "job_id": "J-2", "last_activity": "2024-03-01"}
        ]))
        .unwrap();
        InMemorySource::new(records)
    }

    #[test]
    fn render_yaml() {
        let body = SourcesResponse {
            sources: vec!["indeed".into(), "linkedin".into()],
        };
        assert_eq!(
            render(&body, OutputFormat::Yaml).unwrap(),
            "sources:\n- indeed\n- linkedin\n"
        );
    }

    #[test]
    fn sources_as_json() {
        let out = sources(
            &source(),
            OutputArgs {
                output: OutputFormat::Json,
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"sources": ["indeed", "linkedin"]}));
    }

    #[test]
    fn application_types_as_json() {
        let out = application_types(
            &source(),
            OutputArgs {
                output: OutputFormat::Json,
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, json!({"application_type": ["inbound", "referral"]}));
    }

    fn list_args(extra: &[&str]) -> ListArgs {
        let argv: Vec<&str> = ["roster", "list"]
            .into_iter()
            .chain(extra.iter().copied())
            .collect();
        let cli = Cli::try_parse_from(argv).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list subcommand");
        };
        args
    }

    fn team() -> InMemorySource {
        let records: Vec<Candidate> = serde_json::from_value(json!([
            {"id": 1, "name": "dora", "position": "SRE", "company": "Acme", "application_type": "inbound",
             "source": "linkedin", "job_id": "J-1", "last_activity": "2024-01-05"},
            {"id": 2, "name": "Cal", "position": "Engineer", "company": "Initech", "application_type": "referral",
             "source": "linkedin", "job_id": "J-1", "last_activity": "2024-01-04"},
            {"id": 3, "name": "Bea", "position": "Acme Scout", "company": "Globex", "application_type": "inbound",
             "source": "indeed", "job_id": "J-2", "last_activity": "2024-01-03"},
            {"id": 4, "name": "abe", "position": "Designer", "company": "ACME", "application_type": "inbound",
             "source": "linkedin", "job_id": "J-3", "last_activity": "2024-01-02"}
        ]))
        .unwrap();
        InMemorySource::new(records)
    }

    #[test]
    fn list_filters_sorts_and_echoes_the_request() {
        let args = list_args(&[
            "--search",
            "acme",
            "--source",
            "linkedin",
            "--sort-by",
            "name",
            "--sort-order",
            "asc",
            "--per-page",
            "1",
            "--page",
            "2",
        ]);
        let out = list(&team(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["meta"],
            json!({
                "page": 2,
                "per_page": 1,
                "total": 2,
                "total_pages": 2,
                "sort_by": "name",
                "sort_order": "asc",
                "filters": {
                    "search": "acme",
                    "application_type": null,
                    "source": ["linkedin"],
                    "job_id": null
                }
            })
        );
        let names: Vec<&str> = value["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["dora"]);
        assert_eq!(value["data"][0]["id"], 1);
    }

    #[test]
    fn list_first_page_is_name_ordered_ignoring_case() {
        let args = list_args(&["--sort-by", "name", "--sort-order", "asc"]);
        let value: serde_json::Value =
            serde_json::from_str(&list(&team(), &args).unwrap()).unwrap();
        let names: Vec<&str> = value["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["abe", "Bea", "Cal", "dora"]);
    }

    struct CountingSource {
        loads: AtomicUsize,
    }

    impl DataSource for CountingSource {
        fn load(&self) -> Result<Vec<Candidate>, DataSourceError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[test]
    fn list_validates_before_loading() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
        };
        let err = list(&source, &list_args(&["--per-page", "0"])).unwrap_err();
        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert_eq!(validation.issues[0].param, "per_page");
        assert_eq!(source.loads.load(Ordering::SeqCst), 0);

        list(&source, &list_args(&[])).unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn yaml_keeps_wide_integers_and_field_order() {
        let data: serde_json::Value = serde_json::from_str(
            r#"{"small": 7, "wide": 123456789012345678901234567890, "ratio": 0.5}"#,
        )
        .unwrap();
        let out = render(&data, OutputFormat::Yaml).unwrap();
        assert_eq!(
            out,
            "small: 7\nwide: '123456789012345678901234567890'\nratio: 0.5\n"
        );
    }
}
