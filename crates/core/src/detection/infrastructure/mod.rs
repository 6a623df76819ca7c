pub mod replay_hand_detector;
