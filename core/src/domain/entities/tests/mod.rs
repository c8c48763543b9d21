mod verification_code_tests;
