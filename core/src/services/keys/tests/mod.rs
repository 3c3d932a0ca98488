mod key_pair_tests;
