//! Tests for JSON rule file parsing

#[cfg(test)]
mod tests {
    use cellgrid::io::rulefile::{EvolutionDef, NeighborhoodDef, RuleFile};
    use cellgrid::{AutomatonError, BoundaryMode};
    use std::path::Path;
    use tempfile::TempDir;

    const CONWAY: &str = r#"{
        "width": 1000,
        "height": 800,
        "frontier": "Periodic",
        "states": ["dead", "alive"],
        "colors": [[10, 10, 10], [255, 255, 255]],
        "neighborhood": { "kind": "moore" },
        "evolution": { "birth": [3], "survive": [2, 3] }
    }"#;

    fn parse(text: &str) -> cellgrid::Result<RuleFile> {
        RuleFile::parse(text, Path::new("inline.json"))
    }

    // Tests a complete file builds the expected configuration
    // Verified by swapping birth and survive when building the rule
    #[test]
    fn test_conway_file() {
        let file = parse(CONWAY).expect("valid file");
        assert_eq!(file.grid_dimensions().expect("valid size"), (40, 50));

        let config = file.to_config().expect("valid config");
        assert_eq!(config.dimensions(), (40, 50));
        assert_eq!(config.boundary(), BoundaryMode::Periodic);
        assert_eq!(config.neighborhood().len(), 8);
        assert_eq!(
            config.rule().as_counting().map(ToString::to_string),
            Some("B3/S23".to_string())
        );
    }

    // Tests omitted sizes and frontier fall back to defaults
    // Verified by removing the serde defaults
    #[test]
    fn test_defaults() {
        let file = parse(
            r#"{
                "states": ["dead", "alive"],
                "colors": [[0, 0, 0], [255, 255, 255]],
                "neighborhood": { "kind": "von_neumann" },
                "evolution": { "rule": "B2/S" }
            }"#,
        )
        .expect("valid file");

        assert_eq!((file.width, file.height, file.cell_size), (800, 600, 20));
        assert_eq!(file.frontier, BoundaryMode::Periodic);
        assert_eq!(
            file.evolution,
            EvolutionDef::Rulestring {
                rule: "B2/S".to_string()
            }
        );
        assert_eq!(file.to_config().expect("valid config").dimensions(), (30, 40));
    }

    // Tests every neighborhood kind
    // Verified by mapping radius to the von Neumann shape
    #[test]
    fn test_neighborhood_kinds() {
        let radius: NeighborhoodDef =
            serde_json::from_str(r#"{ "kind": "radius", "k": 2 }"#).expect("valid");
        assert_eq!(radius.build().expect("valid").len(), 24);

        let custom: NeighborhoodDef =
            serde_json::from_str(r#"{ "kind": "custom", "offsets": [[-3, 0], [3, 0]] }"#)
                .expect("valid");
        assert_eq!(custom.build().expect("valid").offsets(), &[(-3, 0), (3, 0)]);

        let center: NeighborhoodDef =
            serde_json::from_str(r#"{ "kind": "custom", "offsets": [[0, 0]] }"#).expect("valid");
        assert!(center.build().is_err());
    }

    // Tests semantic errors surface from to_config
    // Verified by skipping the color count check
    #[test]
    fn test_semantic_errors() {
        let three_states = CONWAY.replace(r#"["dead", "alive"]"#, r#"["a", "b", "c"]"#);
        assert!(matches!(
            parse(&three_states).expect("syntactically valid").to_config(),
            Err(AutomatonError::Configuration { .. })
        ));

        let zero_cell = CONWAY.replace(r#""width": 1000"#, r#""cell_size": 0"#);
        assert!(parse(&zero_cell).expect("syntactically valid").to_config().is_err());

        let mirror = CONWAY.replace("Periodic", "Mirror");
        assert_eq!(
            parse(&mirror).expect("valid").to_config().expect("valid").boundary(),
            BoundaryMode::Mirror
        );
    }

    // Tests frontier names match regardless of case and unknown names fail
    // Verified by deriving Deserialize for the frontier field
    #[test]
    fn test_frontier_names_ignore_case() {
        for (name, expected) in [
            ("open", BoundaryMode::Open),
            ("MIRROR", BoundaryMode::Mirror),
            ("periodic", BoundaryMode::Periodic),
        ] {
            let text = CONWAY.replace(r#""Periodic""#, &format!(r#""{name}""#));
            assert_eq!(parse(&text).expect("valid file").frontier, expected, "{name}");
        }

        let toroidal = CONWAY.replace(r#""Periodic""#, r#""toroidal""#);
        assert!(matches!(parse(&toroidal), Err(AutomatonError::RuleFile { .. })));
    }

    // Tests offsets too large to add to a cell coordinate are rejected up front
    // Verified by removing the reach limit from configuration validation
    #[test]
    fn test_overflowing_offset_rejected() {
        let far = CONWAY
            .replace(r#""Periodic""#, r#""Open""#)
            .replace(
                r#"{ "kind": "moore" }"#,
                r#"{ "kind": "custom", "offsets": [[9223372036854775807, 0]] }"#,
            );
        let file = parse(&far).expect("syntactically valid");
        assert!(matches!(
            file.to_config(),
            Err(AutomatonError::Configuration { .. })
        ));

        let negative = CONWAY.replace(
            r#"{ "kind": "moore" }"#,
            r#"{ "kind": "custom", "offsets": [[0, -9223372036854775808]] }"#,
        );
        assert!(parse(&negative).expect("syntactically valid").to_config().is_err());
    }

    // Tests syntax errors and unknown fields
    // Verified by allowing unknown fields
    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse("{"), Err(AutomatonError::RuleFile { .. })));
        let typo = CONWAY.replace("frontier", "frontera");
        assert!(matches!(parse(&typo), Err(AutomatonError::RuleFile { .. })));
    }

    // Tests loading from disk
    // Verified by ignoring the path and parsing an empty string
    #[test]
    fn test_from_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("conway.json");
        std::fs::write(&path, CONWAY).expect("write rule file");

        let file = RuleFile::from_path(&path).expect("valid file");
        assert_eq!(file.states, vec!["dead".to_string(), "alive".to_string()]);

        assert!(matches!(
            RuleFile::from_path(&dir.path().join("missing.json")),
            Err(AutomatonError::FileSystem { .. })
        ));
    }
}
