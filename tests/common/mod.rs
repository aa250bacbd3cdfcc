pub mod mock_worldbank;
