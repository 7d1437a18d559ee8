#[cfg(test)]
mod tests {
    use crate::io::loaders::{GameLoadResult, GameLoader, GameSourceType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp JSON file
    fn create_temp_json_file() -> NamedTempFile {
        let json_content = r#"[
            {
                "id": "g1", "rated": true,
                "created_at": 1504210000000, "last_move_at": 1504210360000,
                "turns": 13, "victory_status": "resign", "winner": "white",
                "increment_code": "15+2",
                "white_id": "ann", "white_rating": 1500,
                "black_id": "bob", "black_rating": 1191,
                "moves": "d4 d5", "opening_eco": "D00",
                "opening_name": "Queen's Pawn Game", "opening_ply": 2
            },
            {
                "id": "g2", "rated": false,
                "created_at": 1504210000000, "last_move_at": 1504210360000,
                "turns": 40, "victory_status": "mate", "winner": "black",
                "increment_code": "10+0",
                "white_id": "cid", "white_rating": 1400,
                "black_id": "dan", "black_rating": 1450,
                "moves": "e4 e5", "opening_eco": "C20",
                "opening_name": "King's Pawn Game", "opening_ply": 2
            }
        ]"#;

        let mut temp_file = NamedTempFile::with_suffix(".json").unwrap();
        write!(temp_file, "{}", json_content).unwrap();
        temp_file
    }

    /// Helper to create a temp CSV file
    fn create_temp_csv_file() -> NamedTempFile {
        let csv_content = "id,rated,created_at,last_move_at,turns,victory_status,winner,increment_code,white_id,white_rating,black_id,black_rating,moves,opening_eco,opening_name,opening_ply\n\
            g1,True,1504210000000,1504210360000,13,resign,white,15+2,ann,1500,bob,1191,d4 d5,D00,Queen's Pawn Game,2\n\
            g2,False,1504210000000,1504210360000,40,mate,black,10+0,cid,1400,dan,1450,e4 e5,C20,King's Pawn Game,2\n";

        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        write!(temp_file, "{}", csv_content).unwrap();
        temp_file
    }

    /// Test GameLoadResult::new
    #[test]
    fn test_game_load_result_new() {
        let csv_file = create_temp_csv_file();
        let df = crate::parsing::csv_parser::parse_games_csv(csv_file.path()).unwrap();

        let result = GameLoadResult::new(df.clone(), GameSourceType::Csv);

        assert_eq!(result.source_type, GameSourceType::Csv);
        assert_eq!(result.num_games, df.height());
    }

    /// Test load_from_file with JSON extension auto-detection
    #[test]
    fn test_load_from_file_json() {
        let json_file = create_temp_json_file();
        let result = GameLoader::load_from_file(json_file.path());

        assert!(result.is_ok(), "Should load JSON file: {:?}", result.err());
        let load_result = result.unwrap();
        assert_eq!(load_result.source_type, GameSourceType::Json);
        assert_eq!(load_result.num_games, 2);
    }

    /// Test load_from_file with CSV extension auto-detection
    #[test]
    fn test_load_from_file_csv() {
        let csv_file = create_temp_csv_file();
        let result = GameLoader::load_from_file(csv_file.path());

        assert!(result.is_ok(), "Should load CSV file: {:?}", result.err());
        let load_result = result.unwrap();
        assert_eq!(load_result.source_type, GameSourceType::Csv);
        assert_eq!(load_result.num_games, 2);
    }

    /// JSON and CSV sources describing the same games produce equal frames
    #[test]
    fn test_json_and_csv_sources_agree() {
        let from_json = GameLoader::load_from_file(create_temp_json_file().path()).unwrap();
        let from_csv = GameLoader::load_from_file(create_temp_csv_file().path()).unwrap();

        assert!(crate::preprocessing::frames_equal(
            &from_json.dataframe,
            &from_csv.dataframe
        ));
    }

    /// Test load_from_file with unsupported extension
    #[test]
    fn test_load_from_file_unsupported_extension() {
        let mut temp_file = NamedTempFile::with_suffix(".txt").unwrap();
        write!(temp_file, "some content").unwrap();

        let result = GameLoader::load_from_file(temp_file.path());

        assert!(result.is_err(), "Should fail with unsupported extension");
        let error_msg = result.unwrap_err().to_string();
        assert!(
            error_msg.contains("Unsupported file format"),
            "Error should mention unsupported format: {}",
            error_msg
        );
    }

    /// Test load_from_file with no extension
    #[test]
    fn test_load_from_file_no_extension() {
        let path = std::path::PathBuf::from("/tmp/file_without_extension");
        let result = GameLoader::load_from_file(&path);
        assert!(result.is_err());
    }

    /// Test load_from_json_str with malformed JSON
    #[test]
    fn test_load_from_json_str_invalid() {
        let result = GameLoader::load_from_json_str("{ not json");
        assert!(result.is_err());
    }
}
