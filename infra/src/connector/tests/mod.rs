mod signzy_tests;
