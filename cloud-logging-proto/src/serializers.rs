//! proto3 JSON mapping for the well-known types used by the logging API.
//!
//! Fields holding well-known types point their `serde(with = ...)` attribute
//! at one of the modules below. Enumerations are written by name and read
//! back from either the name or the number.

use base64::Engine as _;
use prost_types::value::Kind;
use prost_types::{Any, Duration, FieldMask, ListValue, Struct, Timestamp, Value};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use std::fmt;

/// Converts a protobuf `Struct` into a JSON object.
pub fn struct_to_json(value: &Struct) -> serde_json::Map<String, serde_json::Value> {
    value
        .fields
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect()
}

/// Converts a JSON object into a protobuf `Struct`.
pub fn json_to_struct(map: serde_json::Map<String, serde_json::Value>) -> Struct {
    Struct {
        fields: map
            .into_iter()
            .map(|(k, v)| (k, json_to_value(v)))
            .collect(),
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match &value.kind {
        None | Some(Kind::NullValue(_)) => serde_json::Value::Null,
        Some(Kind::NumberValue(n)) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Some(Kind::StringValue(s)) => serde_json::Value::String(s.clone()),
        Some(Kind::BoolValue(b)) => serde_json::Value::Bool(*b),
        Some(Kind::StructValue(s)) => serde_json::Value::Object(struct_to_json(s)),
        Some(Kind::ListValue(l)) => {
            serde_json::Value::Array(l.values.iter().map(value_to_json).collect())
        }
    }
}

fn json_to_value(value: serde_json::Value) -> Value {
    let kind = match value {
        serde_json::Value::Null => Kind::NullValue(0),
        serde_json::Value::Bool(b) => Kind::BoolValue(b),
        serde_json::Value::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or_default()),
        serde_json::Value::String(s) => Kind::StringValue(s),
        serde_json::Value::Array(values) => Kind::ListValue(ListValue {
            values: values.into_iter().map(json_to_value).collect(),
        }),
        serde_json::Value::Object(map) => Kind::StructValue(json_to_struct(map)),
    };
    Value { kind: Some(kind) }
}

/// `Option<Timestamp>` as an RFC 3339 string in UTC.
pub mod timestamp {
    use super::*;

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => {
                let nanos = u32::try_from(ts.nanos)
                    .map_err(|_| ser::Error::custom("timestamp nanos must not be negative"))?;
                let dt = chrono::DateTime::from_timestamp(ts.seconds, nanos)
                    .ok_or_else(|| ser::Error::custom("timestamp out of range"))?;
                serializer.serialize_str(&dt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                let dt = chrono::DateTime::parse_from_rfc3339(&s).map_err(de::Error::custom)?;
                Ok(Timestamp {
                    seconds: dt.timestamp(),
                    nanos: dt.timestamp_subsec_nanos() as i32,
                })
            })
            .transpose()
    }
}

/// `Option<Duration>` as a decimal number of seconds suffixed with `s`.
pub mod duration {
    use super::*;

    pub(crate) fn format(d: &Duration) -> String {
        let negative = d.seconds < 0 || d.nanos < 0;
        let seconds = d.seconds.unsigned_abs();
        let nanos = d.nanos.unsigned_abs();
        let sign = if negative { "-" } else { "" };
        if nanos == 0 {
            format!("{sign}{seconds}s")
        } else {
            let frac = format!("{nanos:09}");
            format!("{sign}{seconds}.{}s", frac.trim_end_matches('0'))
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Duration> {
        let body = s.strip_suffix('s')?;
        let (negative, body) = match body.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let (secs, frac) = body.split_once('.').unwrap_or((body, ""));
        let seconds: i64 = secs.parse().ok()?;
        if frac.len() > 9 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let nanos: i32 = if frac.is_empty() {
            0
        } else {
            format!("{frac:0<9}").parse().ok()?
        };
        Some(if negative {
            Duration {
                seconds: -seconds,
                nanos: -nanos,
            }
        } else {
            Duration { seconds, nanos }
        })
    }

    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&format(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                parse(&s).ok_or_else(|| de::Error::custom(format!("invalid duration `{s}`")))
            })
            .transpose()
    }
}

/// `Option<FieldMask>` as comma separated lowerCamelCase paths.
pub mod field_mask {
    use super::*;

    fn to_camel(path: &str) -> String {
        let mut out = String::with_capacity(path.len());
        let mut upper = false;
        for c in path.chars() {
            if c == '_' {
                upper = true;
            } else if upper {
                out.extend(c.to_uppercase());
                upper = false;
            } else {
                out.push(c);
            }
        }
        out
    }

    fn to_snake(path: &str) -> String {
        let mut out = String::with_capacity(path.len() + 4);
        for c in path.chars() {
            if c.is_ascii_uppercase() {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    pub fn serialize<S>(value: &Option<FieldMask>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(mask) => {
                let joined = mask
                    .paths
                    .iter()
                    .map(|p| to_camel(p))
                    .collect::<Vec<_>>()
                    .join(",");
                serializer.serialize_str(&joined)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<FieldMask>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.map(|s| FieldMask {
            paths: s
                .split(',')
                .filter(|p| !p.is_empty())
                .map(to_snake)
                .collect(),
        }))
    }
}

/// `int64` fields as JSON strings. Numbers are accepted on input.
pub mod i64_string {
    use super::*;

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct I64Visitor;

        impl Visitor<'_> for I64Visitor {
            type Value = i64;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an int64 as a string or a number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
                i64::try_from(v).map_err(E::custom)
            }

            fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
                Ok(0)
            }
        }

        deserializer.deserialize_any(I64Visitor)
    }
}

/// A protobuf `Struct` as a plain JSON object.
pub mod struct_value {
    use super::*;

    pub fn serialize<S>(value: &Struct, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct_to_json(value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Struct, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(json_to_struct(map))
    }
}

/// A protobuf `Any` as `{"@type": ..., "value": <base64>}`.
///
/// Objects carrying the embedded message fields instead of `value` keep those
/// fields as UTF-8 JSON in `Any::value`, since the message schema is unknown
/// here.
pub mod any_value {
    use super::*;

    pub(crate) fn to_json(value: &Any) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("@type".into(), value.type_url.clone().into());
        map.insert(
            "value".into(),
            base64::engine::general_purpose::STANDARD
                .encode(&value.value)
                .into(),
        );
        serde_json::Value::Object(map)
    }

    pub(crate) fn from_json<E: de::Error>(
        mut map: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Any, E> {
        let type_url = match map.remove("@type") {
            Some(serde_json::Value::String(s)) => s,
            Some(_) => return Err(E::custom("`@type` must be a string")),
            None => String::new(),
        };
        let value = match map.remove("value") {
            Some(serde_json::Value::String(s)) if map.is_empty() => {
                base64::engine::general_purpose::STANDARD
                    .decode(s)
                    .map_err(E::custom)?
            }
            Some(other) => {
                map.insert("value".into(), other);
                serde_json::to_vec(&map).map_err(E::custom)?
            }
            None if map.is_empty() => Vec::new(),
            None => serde_json::to_vec(&map).map_err(E::custom)?,
        };
        Ok(Any { type_url, value })
    }

    pub fn serialize<S>(value: &Any, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        to_json(value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Any, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        from_json(map)
    }
}

/// `repeated google.protobuf.Any`.
pub mod any_list {
    use super::*;

    pub fn serialize<S>(value: &[Any], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value
            .iter()
            .map(any_value::to_json)
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Any>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Vec<serde_json::Map<String, serde_json::Value>>>::deserialize(deserializer)?
            .unwrap_or_default()
            .into_iter()
            .map(any_value::from_json)
            .collect()
    }
}

struct EnumVisitor {
    name: &'static str,
    from_name: fn(&str) -> Option<i32>,
}

impl Visitor<'_> for EnumVisitor {
    type Value = i32;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a `{}` name or number", self.name)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        (self.from_name)(v)
            .ok_or_else(|| E::custom(format!("unknown `{}` value `{v}`", self.name)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<i32, E> {
        Ok(0)
    }
}

macro_rules! enum_serializers {
    ($($module:ident => $enum:path),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($enum), "` by name.")]
            pub mod $module {
                use super::*;

                pub fn serialize<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    match <$enum>::try_from(*value) {
                        Ok(v) => serializer.serialize_str(v.as_str_name()),
                        Err(_) => serializer.serialize_i32(*value),
                    }
                }

                pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    deserializer.deserialize_any(EnumVisitor {
                        name: stringify!($enum),
                        from_name: |name| <$enum>::from_str_name(name).map(|v| v as i32),
                    })
                }
            }
        )*
    };
}

enum_serializers! {
    log_severity => crate::google::logging::r#type::LogSeverity,
    launch_stage => crate::google::api::LaunchStage,
    label_value_type => crate::google::api::label_descriptor::ValueType,
    metric_kind => crate::google::api::metric_descriptor::MetricKind,
    metric_value_type => crate::google::api::metric_descriptor::ValueType,
    suppression_reason => crate::google::logging::v2::tail_log_entries_response::suppression_info::Reason,
    lifecycle_state => crate::google::logging::v2::LifecycleState,
    index_type => crate::google::logging::v2::IndexType,
    version_format => crate::google::logging::v2::log_sink::VersionFormat,
    api_version => crate::google::logging::v2::log_metric::ApiVersion,
}
