//! Typed workflow arguments and their pure validation
//!
//! Each workflow takes a plain struct; validation is a pure function that
//! reports every failing field at once. The interactive adapter and the
//! CLI both funnel through these validators before anything touches the
//! network.

use std::fmt;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

pub fn validate_token_name(value: &str) -> Result<(), String> {
    if value.len() < 3 || value.len() > 20 {
        return Err("length must be between 3 and 20 characters".to_string());
    }
    if !is_alphanumeric(value) {
        return Err("alphanumeric characters only".to_string());
    }
    Ok(())
}

pub fn validate_token_ticker(value: &str) -> Result<(), String> {
    if value.len() < 3 || value.len() > 10 {
        return Err("length must be between 3 and 10 characters".to_string());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err("uppercase alphanumeric characters only".to_string());
    }
    Ok(())
}

pub fn validate_sft_name(value: &str) -> Result<(), String> {
    if value.is_empty() || value.len() > 20 {
        return Err("length must be between 1 and 20 characters".to_string());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        return Err("alphanumeric characters and spaces only".to_string());
    }
    Ok(())
}

pub fn validate_quantity(value: u32) -> Result<(), String> {
    if value < 1 {
        return Err("quantity must be at least 1".to_string());
    }
    Ok(())
}

pub fn validate_royalties(value: u32) -> Result<(), String> {
    if value > 100 {
        return Err("royalties must be between 0 and 100".to_string());
    }
    Ok(())
}

pub fn validate_cid(value: &str) -> Result<(), String> {
    if value.len() != 59 {
        return Err("a CID is exactly 59 characters".to_string());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err("lowercase alphanumeric characters only".to_string());
    }
    Ok(())
}

pub fn validate_tags(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("required".to_string());
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ',')
    {
        return Err("lowercase alphanumeric characters and commas only".to_string());
    }
    Ok(())
}

/// Arguments for the issue-token workflow.
#[derive(Debug, Clone)]
pub struct IssueTokenArgs {
    pub token_name: String,
    pub token_ticker: String,
}

impl IssueTokenArgs {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Err(message) = validate_token_name(&self.token_name) {
            errors.push(FieldError {
                field: "token-name",
                message,
            });
        }
        if let Err(message) = validate_token_ticker(&self.token_ticker) {
            errors.push(FieldError {
                field: "token-ticker",
                message,
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Arguments for the mint workflow.
#[derive(Debug, Clone)]
pub struct MintArgs {
    pub quantity: u32,
    pub name: String,
    /// Percentage, 0-100; carried on the wire in basis points.
    pub royalties: u32,
    pub metadata_cid: String,
    pub tags: String,
    pub image_cid: String,
}

impl MintArgs {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let checks: [(&'static str, Result<(), String>); 6] = [
            ("quantity", validate_quantity(self.quantity)),
            ("name", validate_sft_name(&self.name)),
            ("royalties", validate_royalties(self.royalties)),
            ("metadata-cid", validate_cid(&self.metadata_cid)),
            ("tags", validate_tags(&self.tags)),
            ("image-cid", validate_cid(&self.image_cid)),
        ];
        for (field, result) in checks {
            if let Err(message) = result {
                errors.push(FieldError { field, message });
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
