#[cfg(test)]
mod pipeline {
    use std::fs;
    use std::path::{Path, PathBuf};

    use loyers_paris::config::PipelineConfig;
    use loyers_paris::data::{extract_transform, extract_transform_with_report, ExtractError};
    use loyers_paris::map::{render_map, visible_subset, FilterOptions, FilterState};
    use loyers_paris::pipeline::{run, run_with_store};
    use loyers_paris::store::{load_into, MemoryStore};

    const HEADER: &str = "Secteurs Géographiques,Nombre de pièces principales,Loyers de référence,geo_point_2d,Type de location,Année\n";

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("logement-encadrement-des-loyers.csv");
        fs::write(&path, format!("{HEADER}{body}")).unwrap();
        path
    }

    fn config(source: PathBuf, output: PathBuf) -> PipelineConfig {
        PipelineConfig {
            source: Some(source),
            output,
            open_map: false,
            ..Default::default()
        }
    }

    #[test]
    fn non_numeric_rent_keeps_only_bastille() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_csv(
            dir.path(),
            "Bastille,2,30.5,\"48.85,2.37\",nue,2024\n\
             Marais,1,N/A,\"48.86,2.36\",meublée,2024\n",
        );

        let dataset = extract_transform(&source).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].quartier, "Bastille");
        assert_eq!(dataset[0].pieces, 2);
        assert_eq!(dataset[0].loyer, 30.5);
        assert_eq!(dataset[0].latitude, 48.85);
        assert_eq!(dataset[0].longitude, 2.37);
        assert_eq!(dataset[0].type_location, "nue");
    }

    #[test]
    fn header_spacing_and_case_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("loyers.csv");
        fs::write(
            &source,
            " SECTEURS GÉOGRAPHIQUES ,nombre de pièces principales, Loyers de Référence,Geo Point 2D,type de location\n\
             Bastille,3,27.1,\"48.85, 2.37\",meublé\n",
        )
        .unwrap();

        let dataset = extract_transform(&source).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].quartier, "Bastille");
    }

    #[test]
    fn invalid_rows_are_excluded_and_counted() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_csv(
            dir.path(),
            "Bastille,2,30.5,\"48.85,2.37\",nue,2024\n\
             Marais,1,25.0,,meublé,2024\n\
             Marais,1,25.0,48.86 2.36,meublé,2024\n\
             Marais,1,25.0,\"nord,2.36\",meublé,2024\n\
             Marais,1,25.0,\"48.86,est\",meublé,2024\n",
        );

        let (dataset, report) = extract_transform_with_report(&source).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(report.rows_read, 5);
        assert_eq!(report.rows_kept, 1);
        assert_eq!(report.rows_dropped(), 4);
    }

    #[test]
    fn missing_source_is_input_not_found() {
        let err = extract_transform("/no/such/logement.xlsx").unwrap_err();
        assert!(matches!(err, ExtractError::InputNotFound { .. }));
    }

    #[test]
    fn unrelated_columns_are_schema_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("autre.csv");
        fs::write(&source, "ville,population\nParis,2100000\n").unwrap();

        let err = extract_transform(&source).unwrap_err();
        match err {
            ExtractError::SchemaMismatch { missing, found } => {
                assert_eq!(
                    missing,
                    vec!["quartier", "pieces", "loyer", "type_location", "coordonnees"]
                );
                assert_eq!(found, vec!["ville", "population"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_source_clears_store_and_renders_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_csv(dir.path(), "");
        let output = dir.path().join("carte.html");

        let mut store = MemoryStore::new();
        let previous = vec![loyers_paris::RentRecord {
            quartier: "Ancien".to_string(),
            pieces: 1,
            loyer: 20.0,
            latitude: 48.8,
            longitude: 2.3,
            type_location: "nue".to_string(),
        }];
        load_into(&mut store, &previous, "loyers", "paris_2024").unwrap();

        let summary = run_with_store(&config(source, output.clone()), &mut store).unwrap();
        assert_eq!(summary.report.rows_read, 0);
        assert_eq!(summary.inserted, Some(0));
        assert_eq!(store.count("loyers", "paris_2024"), 0);

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("const data = [];"));
        assert!(html.contains("const range = null;"));
    }

    #[test]
    fn rerunning_leaves_exactly_one_copy() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_csv(
            dir.path(),
            "Bastille,2,30.5,\"48.85,2.37\",nue,2024\n\
             Marais,1,28.2,\"48.86,2.36\",meublée,2024\n\
             Montmartre,3,24.9,\"48.88,2.34\",nue,2024\n",
        );
        let cfg = config(source, dir.path().join("carte.html"));

        let mut store = MemoryStore::new();
        run_with_store(&cfg, &mut store).unwrap();
        let summary = run_with_store(&cfg, &mut store).unwrap();

        assert_eq!(summary.inserted, Some(3));
        assert_eq!(store.count("loyers", "paris_2024"), 3);
        assert_eq!(summary.map_path, dir.path().join("carte.html"));
    }

    #[test]
    fn skip_store_only_renders() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_csv(dir.path(), "Bastille,2,30.5,\"48.85,2.37\",nue,2024\n");
        let output = dir.path().join("carte.html");
        let cfg = PipelineConfig {
            skip_store: true,
            ..config(source, output.clone())
        };

        let summary = run(&cfg).unwrap();
        assert_eq!(summary.inserted, None);
        assert!(output.exists());
    }

    #[test]
    fn map_filters_follow_the_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_csv(
            dir.path(),
            "Bastille,2,30.5,\"48.85,2.37\",non meublée,2024\n\
             Marais,1,28.2,\"48.86,2.36\",meublée,2024\n\
             Marais,2,29.0,\"48.86,2.36\",meublée,2024\n",
        );
        let dataset = extract_transform(&source).unwrap();

        let options = FilterOptions::from_dataset(&dataset);
        assert_eq!(options.pieces, vec!["all", "1", "2"]);
        assert_eq!(options.type_location, vec!["all", "meublée", "non meublée"]);
        assert_eq!(visible_subset(&dataset, &FilterState::default()).len(), 3);

        let path = render_map(&dataset, dir.path().join("carte.html")).unwrap();
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("\"quartier\":\"Bastille\""));
    }
}
