use serde::{Deserialize, Deserializer};

/// A student as returned by `GET /students/`.
///
/// Core-time slots use 0 for "unset", matching the server defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Student {
    #[serde(deserialize_with = "string_or_number")]
    pub student_id: String,
    pub name: String,
    #[serde(default)]
    pub core_time_1_day: u8,
    #[serde(default)]
    pub core_time_1_period: u8,
    #[serde(default)]
    pub core_time_2_day: u8,
    #[serde(default)]
    pub core_time_2_period: u8,
    #[serde(default)]
    pub core_time_violations: u32,
}

impl Student {
    pub fn core_time_1(&self) -> (u8, u8) {
        (self.core_time_1_day, self.core_time_1_period)
    }

    pub fn core_time_2(&self) -> (u8, u8) {
        (self.core_time_2_day, self.core_time_2_period)
    }
}

/// Student ids are strings on the wire, but numeric ids are accepted too.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_core_time_fields_default_to_unset() {
        let s: Student = serde_json::from_str(r#"{"student_id":"S1","name":"Sato"}"#).unwrap();
        assert_eq!(s.core_time_1(), (0, 0));
        assert_eq!(s.core_time_2(), (0, 0));
        assert_eq!(s.core_time_violations, 0);
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let s: Student =
            serde_json::from_str(r#"{"student_id":1042,"name":"Ito","core_time_1_day":2,"core_time_1_period":3}"#)
                .unwrap();
        assert_eq!(s.student_id, "1042");
        assert_eq!(s.core_time_1(), (2, 3));
    }
}
