use anyhow::{anyhow, Result};

use crate::scheduler::{CourtCatalog, CourtId};

/// Checks a picked court index against the configured catalog. Callback
/// payloads come from buttons the bot itself built, but stale keyboards can
/// outlive a catalog change, so the index is validated anyway.
pub fn validate_court_index(court: CourtId, catalog: &CourtCatalog) -> Result<()> {
    if catalog.courts.is_empty() {
        return Err(anyhow!("No courts are configured"));
    }
    if court >= catalog.courts.len() {
        return Err(anyhow!(
            "Court index {} is outside the catalog (0..{})",
            court,
            catalog.courts.len() - 1
        ));
    }
    Ok(())
}

/// Validates a parsed catalog before the bot starts.
pub fn validate_catalog(catalog: &CourtCatalog) -> Result<()> {
    if catalog.courts.is_empty() {
        return Err(anyhow!("COURT_NAMES must list at least one court"));
    }
    if catalog.courts.iter().any(|name| name.trim().is_empty()) {
        return Err(anyhow!("COURT_NAMES entries cannot be empty"));
    }
    if catalog.time_slots.iter().any(|label| label.trim().is_empty()) {
        return Err(anyhow!("TIME_SLOT_LABELS entries cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_index_inside_catalog() {
        let catalog = CourtCatalog::default();
        assert!(validate_court_index(0, &catalog).is_ok());
        assert!(validate_court_index(4, &catalog).is_ok());
    }

    #[test]
    fn test_court_index_outside_catalog() {
        let catalog = CourtCatalog::default();
        let err = validate_court_index(5, &catalog).unwrap_err();
        assert!(err.to_string().contains("outside the catalog"));
    }

    #[test]
    fn test_empty_catalog_rejects_any_index() {
        let catalog = CourtCatalog::new(Vec::new(), Vec::new());
        assert!(validate_court_index(0, &catalog).is_err());
    }

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(validate_catalog(&CourtCatalog::default()).is_ok());
    }

    #[test]
    fn test_catalog_without_courts_is_invalid() {
        let catalog = CourtCatalog::new(Vec::new(), vec!["10:15".to_string()]);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("at least one court"));
    }

    #[test]
    fn test_blank_court_name_is_invalid() {
        let catalog = CourtCatalog::new(
            vec!["1".to_string(), "  ".to_string()],
            vec!["10:15".to_string()],
        );
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_blank_time_slot_is_invalid() {
        let catalog = CourtCatalog::new(vec!["1".to_string()], vec![String::new()]);
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_catalog_without_time_slots_is_allowed() {
        // Rendering falls back to numbered blocks when labels run out.
        let catalog = CourtCatalog::new(vec!["1".to_string()], Vec::new());
        assert!(validate_catalog(&catalog).is_ok());
    }
}
