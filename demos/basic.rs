//! Basic decode/encode example
//!
//! Run with: cargo run --example basic [path/to/config.ini]

use iniconfig::{DecodeOptions, decode, decode_file_with, encode, ini_record};

ini_record! {
    #[derive(Debug, Default)]
    pub struct Server {
        #[ini = "ip"]
        pub ip: String,
        #[ini = "port"]
        pub port: i64,
    }
}

ini_record! {
    #[derive(Debug, Default)]
    pub struct Mysql {
        #[ini = "username"]
        pub username: String,
        #[ini = "password"]
        pub password: String,
        #[ini = "port"]
        pub port: i64,
        #[ini = "host"]
        pub host: String,
        #[ini = "database"]
        pub database: String,
    }
}

ini_record! {
    #[derive(Debug, Default)]
    pub struct Config {
        #[ini = "server"]
        pub server: Server,
        #[ini = "mysql"]
        pub mysql: Mysql,
    }
}

const DEFAULT_CONFIG: &str = "\
[server]
ip = 127.0.0.1
port = 8080

[mysql]
username = root
password = secret
port = 3306
host = localhost
database = app
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (RUST_LOG=iniconfig=trace shows every assignment)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Config::default();
    match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading {}...", path);
            decode_file_with(&path, &mut config, &DecodeOptions::strict())?;
        }
        None => decode(DEFAULT_CONFIG, &mut config)?,
    }

    println!("Decoded: {:#?}", config);
    println!("Encoded:\n{}", encode(&config));

    Ok(())
}
