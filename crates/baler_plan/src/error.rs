//! Error types for bundle sequencing.

/// Errors that can occur while computing the bundle sequence.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Two or more entries resolve to the same output bundle name.
    ///
    /// The build must not proceed with an ambiguous bundle list; every
    /// colliding name is listed so the configuration can be fixed in one
    /// pass.
    #[error("multiple bundles are configured with the same output name: {}", .names.join(", "))]
    DuplicateBundleNames {
        /// Every colliding name, in first-occurrence order.
        names: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_single_name() {
        let err = PlanError::DuplicateBundleNames {
            names: vec!["vendor".to_string()],
        };
        assert_eq!(
            format!("{err}"),
            "multiple bundles are configured with the same output name: vendor"
        );
    }

    #[test]
    fn display_lists_every_name() {
        let err = PlanError::DuplicateBundleNames {
            names: vec!["runtime".to_string(), "main".to_string()],
        };
        assert_eq!(
            format!("{err}"),
            "multiple bundles are configured with the same output name: runtime, main"
        );
    }
}
