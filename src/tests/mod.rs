mod loja_api_tests;
