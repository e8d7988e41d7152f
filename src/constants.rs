/// Path of the BusinessFlow login endpoint, relative to the server URL
pub const LOGIN_PATH: &str = "BusinessFlow/rest/v1/login";
/// Path of the BusinessFlow endpoint that creates a new application
pub const NEW_APPLICATION_PATH: &str = "BusinessFlow/rest/v1/applications/new";
/// Name of the cookie that carries the session token
pub const SESSION_COOKIE: &str = "JSESSIONID";
/// Scheme prepended to server addresses given without one
pub const DEFAULT_SCHEME: &str = "https";
/// Server used when neither `--server` nor `ALGO_SERVER` is set
pub const DEFAULT_SERVER: &str = "algosec-server.com";
/// Applications file used when neither `--file` nor `ALGO_APPS_FILE` is set
pub const DEFAULT_APPS_FILE: &str = "../Illumio/IllumioApps.txt";
/// User agent string sent with every request
pub const USER_AGENT: &str = "algosec-import/0.1.0";

/// Environment variable holding the server URL
pub const ENV_SERVER: &str = "ALGO_SERVER";
/// Environment variable holding the username
pub const ENV_USER: &str = "ALGO_USER";
/// Environment variable holding the password
pub const ENV_PASS: &str = "ALGO_PASS";
/// Environment variable holding the applications file path
pub const ENV_APPS_FILE: &str = "ALGO_APPS_FILE";
/// Environment variable that turns TLS certificate verification on
pub const ENV_VERIFY_TLS: &str = "ALGO_VERIFY_TLS";
