pub mod mock_providers;

pub use mock_providers::{
    FIREBASE_LOCAL_ID, MockProviders, POCKETBASE_RECORD_ID, SUPABASE_USER_ID, TEST_EMAIL,
    TEST_PASSWORD,
};
pub use test_app::TestApp;
