mod booking_test;
mod middleware_test;
mod pages_test;
