mod aggregate_tests;
