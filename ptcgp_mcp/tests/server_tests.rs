mod helpers;

use helpers::{SAMPLE_CSV, create_dataset};
use ptcgp_core::DatasetError;
use ptcgp_mcp::PtcgpMcpServer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_loads_dataset_at_startup() {
        let (_dir, path) = create_dataset(SAMPLE_CSV);
        let server = PtcgpMcpServer::new(path);
        assert!(server.is_ok());
    }

    #[test]
    fn test_server_missing_dataset() {
        let (dir, _path) = create_dataset(SAMPLE_CSV);
        let err = PtcgpMcpServer::new(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Unavailable(_)));
        assert_eq!(err.to_string(), "Card database missing");
    }

    #[test]
    fn test_server_corrupt_dataset() {
        let (_dir, path) = create_dataset(
            "id,name,color,attack,ability\n\
             a1-001,Bulbasaur,Grass,\"[{broken\",\n",
        );
        let err = PtcgpMcpServer::new(path).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Corrupt {
                row: 1,
                column: "attack",
                ..
            }
        ));
    }
}
