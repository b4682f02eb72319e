mod chart_tests;
