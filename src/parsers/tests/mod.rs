mod skill_parser_tests;
