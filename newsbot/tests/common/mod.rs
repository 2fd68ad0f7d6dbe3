pub mod mock_bot;
pub mod stub_provider;
