#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DbConnected,
    DbOpenFailed(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    MigrationsSkipped,

    // === TASK MESSAGES ===
    UpdateEmpty,

    // === SERVER MESSAGES ===
    ServerListening(String),

    // === AUTH MESSAGES ===
    OauthEnabled,
    OauthConfigIncomplete,
    SessionSecretMissing,
    OauthExchangeFailed(String),
    OauthLoginSucceeded(String),
}
