//! Tests for progress manager lifecycle

#[cfg(test)]
mod tests {
    use stimgen::io::progress::ProgressManager;

    #[test]
    fn test_family_bar_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.start_family("turtles", 128);
        for _ in 0..128 {
            manager.tick();
        }
        manager.finish_family();
    }

    #[test]
    fn test_tick_without_active_bar_is_harmless() {
        let manager = ProgressManager::new();
        manager.tick();
    }
}
