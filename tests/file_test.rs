//! Path wrapper tests
//!
//! Read and write real files in a scratch directory.

use iniconfig::{DecodeOptions, IniError, decode_file, decode_file_with, encode_file, ini_record};

ini_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Server {
        #[ini = "ip"]
        pub ip: String,
        #[ini = "port"]
        pub port: i64,
    }
}

ini_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Config {
        #[ini = "server"]
        pub server: Server,
    }
}

#[test]
fn test_encode_then_decode_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");

    let config = Config {
        server: Server {
            ip: "192.168.1.10".to_string(),
            port: 443,
        },
    };
    encode_file(&path, &config).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[server]\nip = 192.168.1.10\nport = 443\n"
    );

    let mut decoded = Config::default();
    decode_file(&path, &mut decoded).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn test_encode_file_truncates_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    std::fs::write(&path, "x".repeat(1024)).unwrap();

    encode_file(&path, &Config::default()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[server]\nip = \nport = 0\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    let err = decode_file(dir.path().join("absent.ini"), &mut config).unwrap_err();
    match err {
        IniError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected IO error, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ini");
    std::fs::write(&path, [b'[', 0xff, b']']).unwrap();

    let mut config = Config::default();
    let err = decode_file(&path, &mut config).unwrap_err();
    assert!(matches!(err, IniError::Io(_)));
}

#[test]
fn test_decode_file_with_options_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    std::fs::write(&path, "[server]\nport = 1\n[cache]\n").unwrap();

    let mut config = Config::default();
    let err = decode_file_with(&path, &mut config, &DecodeOptions::strict()).unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert_eq!(config.server.port, 1);
}
