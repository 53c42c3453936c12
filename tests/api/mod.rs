mod health_tests;
mod order_tests;
