//! Column Schema Module
//! Header normalization and the fixed source → canonical column mapping.

/// Canonical column names used after renaming.
pub const QUARTIER: &str = "quartier";
pub const PIECES: &str = "pieces";
pub const LOYER: &str = "loyer";
pub const TYPE_LOCATION: &str = "type_location";
pub const COORDONNEES: &str = "coordonnees";

/// Columns that must be present before rows can be projected.
pub const REQUIRED_COLUMNS: [&str; 5] = [QUARTIER, PIECES, LOYER, TYPE_LOCATION, COORDONNEES];

/// Normalize a raw header: trim, lowercase, spaces to underscores.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Immutable mapping from normalized source headers to canonical names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<(&'static str, &'static str)>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::paris_rent_control()
    }
}

impl ColumnMapping {
    /// Mapping for the "logement-encadrement-des-loyers" open-data export.
    pub fn paris_rent_control() -> Self {
        Self {
            entries: vec![
                ("secteurs_géographiques", QUARTIER),
                ("nombre_de_pièces_principales", PIECES),
                ("loyers_de_référence", LOYER),
                ("type_de_location", TYPE_LOCATION),
                ("geo_point_2d", COORDONNEES),
            ],
        }
    }

    /// Canonical name for a normalized header, if the header is mapped.
    pub fn canonical(&self, normalized: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(source, _)| *source == normalized)
            .map(|(_, canonical)| *canonical)
    }

    /// Final column name for a raw header: normalized, then renamed when mapped.
    pub fn resolve(&self, raw: &str) -> String {
        let normalized = normalize_column_name(raw);
        match self.canonical(&normalized) {
            Some(canonical) => canonical.to_string(),
            None => normalized,
        }
    }

    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }
}
