use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TechStack {
    pub language: Option<String>,
    pub frameworks: Vec<String>,
}

impl TechStack {
    /// Reads the optional `techStack` object of a plan response. Mistyped
    /// fields degrade to missing values instead of failing the response.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let language = object.get("language").and_then(Value::as_str).map(str::to_string);
        let frameworks = match object.get("frameworks") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        };
        Some(Self { language, frameworks })
    }

    pub fn frameworks_label(&self) -> String {
        if self.frameworks.is_empty() {
            "None".to_string()
        } else {
            self.frameworks.join(", ")
        }
    }
}

/// Text of a scalar JSON item; strings are taken verbatim.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Successful result of a requirement submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementAnalysis {
    pub tasks: Vec<String>,
    pub tech_stack: Option<TechStack>,
    pub project_structure: Option<String>,
}

impl RequirementAnalysis {
    pub fn language(&self) -> Option<&str> {
        self.tech_stack
            .as_ref()
            .and_then(|t| t.language.as_deref())
            .filter(|l| !l.is_empty())
    }
}

/// What the output area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskBreakdown {
    /// Full analysis from a fresh submission.
    Analysis(RequirementAnalysis),
    /// Plain numbered list, used when replaying history.
    Numbered(Vec<String>),
}

impl TaskBreakdown {
    #[cfg(test)]
    pub fn tasks(&self) -> &[String] {
        match self {
            TaskBreakdown::Analysis(analysis) => &analysis.tasks,
            TaskBreakdown::Numbered(tasks) => tasks,
        }
    }
}

/// CSS animation delay for the task at `index`, staggered by 0.1s.
pub fn reveal_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

/// Text artifact offered by the "download tasks" action.
pub fn tasks_markdown(tasks: &[String]) -> String {
    tasks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn tech_stack_reads_language_and_frameworks() {
        let stack = TechStack::from_json(&json!({ "language": "python", "frameworks": ["fastapi", "react"] }));
        let stack = stack.unwrap();
        assert_eq!(stack.language.as_deref(), Some("python"));
        assert_eq!(stack.frameworks_label(), "fastapi, react");
    }

    #[test]
    fn mistyped_tech_stack_fields_degrade() {
        let stack = TechStack::from_json(&json!({ "language": 3, "frameworks": "flask" })).unwrap();
        assert_eq!(stack, TechStack::default());
        assert_eq!(stack.frameworks_label(), "None");

        let mixed = TechStack::from_json(&json!({ "frameworks": ["django", null, 2] })).unwrap();
        assert_eq!(mixed.frameworks, vec!["django".to_string(), "2".to_string()]);

        assert_eq!(TechStack::from_json(&json!("python")), None);
    }

    #[test]
    fn scalar_items_become_text() {
        assert_eq!(scalar_text(&json!("a")).as_deref(), Some("a"));
        assert_eq!(scalar_text(&json!(2)).as_deref(), Some("2"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!({ "title": "x" })), None);
    }

    #[test]
    fn empty_language_counts_as_missing() {
        let analysis = RequirementAnalysis {
            tasks: vec![],
            tech_stack: Some(TechStack { language: Some(String::new()), frameworks: vec![] }),
            project_structure: None,
        };
        assert_eq!(analysis.language(), None);
        assert_eq!(analysis.tech_stack.unwrap().frameworks_label(), "None");
    }

    #[test]
    fn markdown_is_newline_joined() {
        let tasks = vec!["Set up repo".to_string(), "Write API".to_string(), "Deploy".to_string()];
        assert_eq!(tasks_markdown(&tasks), "Set up repo\nWrite API\nDeploy");
        assert_eq!(tasks_markdown(&[]), "");
    }

    #[test]
    fn reveal_is_staggered() {
        assert_eq!(reveal_delay(0), "0.0s");
        assert_eq!(reveal_delay(3), "0.3s");
        assert_eq!(reveal_delay(12), "1.2s");
    }
}
