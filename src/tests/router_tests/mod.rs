mod pricing_page_tests;
mod purchase_tests;
