mod adapter_tests;
mod mock_mail_tests;
