mod periods_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - periods_tests: The pure period-list editing operations and the editor contract
// - store_mock: Mocking the document store for probing without a real Firestore project
// - smoke_tests: Basic functionality tests to ensure nothing is broken
