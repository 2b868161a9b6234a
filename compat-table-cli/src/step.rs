//! Scripted interaction steps: `click:<id>`, `touch:<id>`,
//! `key:<id>:<Enter|Space|Escape|Tab>`, `focus:<id>`, `close`, `wait:<ms>`,
//! `settle`.

use std::str::FromStr;

use tabledom::Key;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Click(String),
    Touch(String),
    Key(String, Key),
    Focus(String),
    /// Ask the widget to close its open panel, bypassing input routing.
    Close,
    Wait(u64),
    Settle,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("unknown step `{0}`")]
    Unknown(String),
    #[error("step `{0}` needs a target id")]
    MissingTarget(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("invalid wait `{0}`")]
    InvalidWait(String),
}

fn parse_key(name: &str) -> Result<Key, StepError> {
    match name.to_ascii_lowercase().as_str() {
        "enter" => Ok(Key::Enter),
        "space" => Ok(Key::SPACE),
        "escape" | "esc" => Ok(Key::Escape),
        "tab" => Ok(Key::Tab),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Key::Char(c)),
                _ => Err(StepError::UnknownKey(name.to_string())),
            }
        }
    }
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or_default();
        let target = parts.next().filter(|t| !t.is_empty()).map(str::to_string);
        let need_target = || target.clone().ok_or_else(|| StepError::MissingTarget(s.to_string()));

        match kind {
            "click" => Ok(Step::Click(need_target()?)),
            "touch" => Ok(Step::Touch(need_target()?)),
            "focus" => Ok(Step::Focus(need_target()?)),
            "key" => {
                let id = need_target()?;
                let key = parts
                    .next()
                    .ok_or_else(|| StepError::UnknownKey(String::new()))
                    .and_then(parse_key)?;
                Ok(Step::Key(id, key))
            }
            "wait" => target
                .as_deref()
                .and_then(|ms| ms.parse().ok())
                .map(Step::Wait)
                .ok_or_else(|| StepError::InvalidWait(s.to_string())),
            "close" => Ok(Step::Close),
            "settle" => Ok(Step::Settle),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        assert_eq!("click:c1".parse::<Step>(), Ok(Step::Click("c1".into())));
        assert_eq!("touch:c1".parse::<Step>(), Ok(Step::Touch("c1".into())));
        assert_eq!("focus:c2".parse::<Step>(), Ok(Step::Focus("c2".into())));
        assert_eq!("key:c1:Enter".parse::<Step>(), Ok(Step::Key("c1".into(), Key::Enter)));
        assert_eq!("key:c1:space".parse::<Step>(), Ok(Step::Key("c1".into(), Key::SPACE)));
        assert_eq!("wait:250".parse::<Step>(), Ok(Step::Wait(250)));
        assert_eq!("close".parse::<Step>(), Ok(Step::Close));
        assert_eq!("settle".parse::<Step>(), Ok(Step::Settle));
    }

    #[test]
    fn rejects_malformed_steps() {
        assert_eq!(
            "click".parse::<Step>(),
            Err(StepError::MissingTarget("click".into()))
        );
        assert_eq!(
            "key:c1:F13".parse::<Step>(),
            Err(StepError::UnknownKey("F13".into()))
        );
        assert_eq!(
            "wait:soon".parse::<Step>(),
            Err(StepError::InvalidWait("wait:soon".into()))
        );
        assert_eq!("jump:c1".parse::<Step>(), Err(StepError::Unknown("jump:c1".into())));
    }
}
