mod hud_tests;
