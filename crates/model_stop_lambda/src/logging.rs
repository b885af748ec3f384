use serde_json::{json, Value};

const COMPONENT: &str = "model_stop_handler";

pub fn log_info(event: &str, details: Value) {
    eprintln!("{}", log_line(None, event, details));
}

pub fn log_error(event: &str, details: Value) {
    eprintln!("{}", log_line(Some("error"), event, details));
}

fn log_line(level: Option<&str>, event: &str, details: Value) -> Value {
    let mut line = json!({
        "component": COMPONENT,
        "event": event,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "details": details,
    });
    if let (Some(level), Some(object)) = (level, line.as_object_mut()) {
        object.insert("level".to_string(), Value::from(level));
    }
    line
}
