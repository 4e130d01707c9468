#![allow(dead_code)]

pub mod intake_server;

use std::fs;
use std::path::{Path, PathBuf};

pub const PATIENT_SURVEY: &str = r#"
{
    "title": "Patient Experience Survey",
    "pages": [
        {
            "name": "admission",
            "questions": [
                {"name": "gender", "type": "radiogroup", "choices": ["Male", "Female", "Prefer not to say"]},
                {"name": "admissionEfficiency", "type": "rating", "rateValues": [1, 2, 3, 4, 5]},
                {"name": "roomComfort", "type": "rating"}
            ]
        },
        {
            "name": "stay",
            "questions": [
                {"name": "goodAspects", "type": "comment"},
                {"name": "recommendFacility", "type": "nps"},
                {"name": "facilityCleanliness", "type": "matrix",
                 "rows": [{"value": "rooms", "text": "Rooms"}, {"value": "bathrooms", "text": "Bathrooms"}],
                 "columns": [{"value": 1, "text": "Poor"}, {"value": 5, "text": "Excellent"}]}
            ]
        }
    ]
}
"#;

/// Write the sample survey into `dir` and return its path
pub fn write_survey(dir: &Path) -> PathBuf {
    let path = dir.join("pes.json");
    fs::write(&path, PATIENT_SURVEY).unwrap();
    path
}

/// URL of a local port with nothing listening on it
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/survey", addr)
}
