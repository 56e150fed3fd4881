//! Orchestration test suite: stub-driven lifecycle scenarios


mod watcher_tests;
