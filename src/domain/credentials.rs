use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TEST_PASSWORD: &str = "Test123!";
const TEST_LASTNAME: &str = "User";

/// Account generated for one simulated user. Every field derives from the same
/// short identifier, so the pair used to register is the pair used to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCredentials {
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

impl TestCredentials {
    pub fn generate() -> Self {
        Self::for_id(&short_id())
    }

    pub fn for_id(id: &str) -> Self {
        Self {
            email: format!("testuser-{id}@test.com"),
            password: TEST_PASSWORD.to_string(),
            firstname: format!("Test-{id}"),
            lastname: TEST_LASTNAME.to_string(),
        }
    }
}

/// First eight characters of a v4 UUID.
pub fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
