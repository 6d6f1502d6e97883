mod flashlight_tests;
