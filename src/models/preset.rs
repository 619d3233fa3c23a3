use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Quick annotations offered next to the free-text note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Preset {
    Anulado,
    Cobrado,
    Transfer,
    TpvFisico,
    Duplicado,
    Comercial,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Anulado,
        Preset::Cobrado,
        Preset::Transfer,
        Preset::TpvFisico,
        Preset::Duplicado,
        Preset::Comercial,
    ];

    /// Text written into the `Marked` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Anulado => "ANULADO",
            Preset::Cobrado => "COBRADO",
            Preset::Transfer => "TRANSFER",
            Preset::TpvFisico => "TPV FISICO",
            Preset::Duplicado => "DUPLICADO",
            Preset::Comercial => "COMERCIAL",
        }
    }

    /// Case-insensitive lookup; `-` and `_` stand in for the space in
    /// `TPV FISICO` so the value can be typed without quotes.
    pub fn from_code(s: &str) -> Option<Self> {
        let key = s.trim().to_uppercase().replace(['-', '_'], " ");
        Preset::ALL.into_iter().find(|p| p.as_str() == key)
    }

    /// clap value parser.
    pub fn parse(s: &str) -> Result<Self, String> {
        s.parse::<Preset>().map_err(|e| {
            let names: Vec<&str> = Preset::ALL.iter().map(Preset::as_str).collect();
            format!("{e} (expected one of: {})", names.join(", "))
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_code(s).ok_or_else(|| crate::errors::AppError::InvalidPreset(s.to_string()))
    }
}

/// Pick the annotation for an apply: a non-blank manual note wins over the
/// preset; neither means a plain check mark.
pub fn resolve_annotation(manual: Option<&str>, preset: Option<Preset>) -> String {
    match manual.map(str::trim) {
        Some(note) if !note.is_empty() => note.to_string(),
        _ => preset.map(|p| p.as_str().to_string()).unwrap_or_default(),
    }
}
