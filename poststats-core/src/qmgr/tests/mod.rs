mod year_tests;
