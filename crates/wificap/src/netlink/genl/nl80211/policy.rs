//! Pinned nl80211 attribute policies.
//!
//! The tables mirror `include/uapi/linux/nl80211.h`. Only attributes that
//! are read somewhere, or that the kernel sends in wiphy and interface
//! dumps with a fixed width, carry a scalar kind; the rest are kept as
//! opaque bytes. An id missing from a table fails decoding, so a kernel
//! newer than these tables is reported instead of silently misread.

use crate::netlink::policy::{AttrKind, AttrSpec, Policy};

/// Bitrate entries inside `BAND_ATTR_RATES`.
pub static BITRATE_ATTR: Policy = Policy::new(
    "BITRATE_ATTR",
    &[
        AttrSpec::new(1, "RATE", AttrKind::U32),
        AttrSpec::new(2, "2GHZ_SHORTPREAMBLE", AttrKind::Flag),
    ],
);

/// Channel entries inside `BAND_ATTR_FREQS`.
pub static FREQUENCY_ATTR: Policy = Policy::new(
    "FREQUENCY_ATTR",
    &[
        AttrSpec::new(1, "FREQ", AttrKind::U32),
        AttrSpec::new(2, "DISABLED", AttrKind::Flag),
        AttrSpec::new(3, "NO_IR", AttrKind::Flag),
        AttrSpec::new(4, "NO_IBSS", AttrKind::Flag),
        AttrSpec::new(5, "RADAR", AttrKind::Flag),
        AttrSpec::new(6, "MAX_TX_POWER", AttrKind::U32),
        AttrSpec::new(7, "DFS_STATE", AttrKind::U32),
        AttrSpec::new(8, "DFS_TIME", AttrKind::U32),
        AttrSpec::new(9, "NO_HT40_MINUS", AttrKind::Flag),
        AttrSpec::new(10, "NO_HT40_PLUS", AttrKind::Flag),
        AttrSpec::new(11, "NO_80MHZ", AttrKind::Flag),
        AttrSpec::new(12, "NO_160MHZ", AttrKind::Flag),
        AttrSpec::new(13, "DFS_CAC_TIME", AttrKind::U32),
        AttrSpec::new(14, "INDOOR_ONLY", AttrKind::Flag),
        AttrSpec::new(15, "IR_CONCURRENT", AttrKind::Flag),
        AttrSpec::new(16, "NO_20MHZ", AttrKind::Flag),
        AttrSpec::new(17, "NO_10MHZ", AttrKind::Flag),
        AttrSpec::new(18, "WMM", AttrKind::Binary),
        AttrSpec::new(19, "NO_HE", AttrKind::Flag),
        AttrSpec::new(20, "OFFSET", AttrKind::U32),
        AttrSpec::new(21, "1MHZ", AttrKind::Flag),
        AttrSpec::new(22, "2MHZ", AttrKind::Flag),
        AttrSpec::new(23, "4MHZ", AttrKind::Flag),
        AttrSpec::new(24, "8MHZ", AttrKind::Flag),
        AttrSpec::new(25, "16MHZ", AttrKind::Flag),
        AttrSpec::new(26, "NO_320MHZ", AttrKind::Flag),
        AttrSpec::new(27, "NO_EHT", AttrKind::Flag),
        AttrSpec::new(28, "PSD", AttrKind::Binary),
        AttrSpec::new(29, "DFS_CONCURRENT", AttrKind::Flag),
        AttrSpec::new(30, "NO_6GHZ_VLP_CLIENT", AttrKind::Flag),
        AttrSpec::new(31, "NO_6GHZ_AFC_CLIENT", AttrKind::Flag),
        AttrSpec::new(32, "CAN_MONITOR", AttrKind::Flag),
        AttrSpec::new(33, "ALLOW_6GHZ_VLP_AP", AttrKind::Flag),
        AttrSpec::new(34, "ALLOW_20MHZ_ACTIVITY", AttrKind::Flag),
        AttrSpec::new(35, "NO_4MHZ", AttrKind::Flag),
        AttrSpec::new(36, "NO_8MHZ", AttrKind::Flag),
        AttrSpec::new(37, "NO_16MHZ", AttrKind::Flag),
    ],
);

/// Per-band capabilities inside `NL80211_ATTR_WIPHY_BANDS`.
pub static BAND: Policy = Policy::new(
    "BAND",
    &[
        AttrSpec::new(1, "FREQS", AttrKind::Sequence(&FREQUENCY_ATTR)),
        AttrSpec::new(2, "RATES", AttrKind::Sequence(&BITRATE_ATTR)),
        AttrSpec::new(3, "HT_MCS_SET", AttrKind::Binary),
        AttrSpec::new(4, "HT_CAPA", AttrKind::U16),
        AttrSpec::new(5, "HT_AMPDU_FACTOR", AttrKind::U8),
        AttrSpec::new(6, "HT_AMPDU_DENSITY", AttrKind::U8),
        AttrSpec::new(7, "VHT_MCS_SET", AttrKind::Binary),
        AttrSpec::new(8, "VHT_CAPA", AttrKind::U32),
        AttrSpec::new(9, "IFTYPE_DATA", AttrKind::Binary),
        AttrSpec::new(10, "EDMG_CHANNELS", AttrKind::U8),
        AttrSpec::new(11, "EDMG_BW_CONFIG", AttrKind::U8),
        AttrSpec::new(12, "S1G_MCS_NSS_SET", AttrKind::Binary),
        AttrSpec::new(13, "S1G_CAPA", AttrKind::Binary),
    ],
);

/// Top-level nl80211 message attributes.
pub static NL80211_ATTR: Policy = Policy::new(
    "NL80211_ATTR",
    &[
        AttrSpec::new(1, "WIPHY", AttrKind::U32),
        AttrSpec::new(2, "WIPHY_NAME", AttrKind::NulString),
        AttrSpec::new(3, "IFINDEX", AttrKind::U32),
        AttrSpec::new(4, "IFNAME", AttrKind::NulString),
        AttrSpec::new(5, "IFTYPE", AttrKind::U32),
        AttrSpec::new(6, "MAC", AttrKind::Binary),
        AttrSpec::new(7, "KEY_DATA", AttrKind::Binary),
        AttrSpec::new(8, "KEY_IDX", AttrKind::Binary),
        AttrSpec::new(9, "KEY_CIPHER", AttrKind::Binary),
        AttrSpec::new(10, "KEY_SEQ", AttrKind::Binary),
        AttrSpec::new(11, "KEY_DEFAULT", AttrKind::Binary),
        AttrSpec::new(12, "BEACON_INTERVAL", AttrKind::Binary),
        AttrSpec::new(13, "DTIM_PERIOD", AttrKind::Binary),
        AttrSpec::new(14, "BEACON_HEAD", AttrKind::Binary),
        AttrSpec::new(15, "BEACON_TAIL", AttrKind::Binary),
        AttrSpec::new(16, "STA_AID", AttrKind::Binary),
        AttrSpec::new(17, "STA_FLAGS", AttrKind::Binary),
        AttrSpec::new(18, "STA_LISTEN_INTERVAL", AttrKind::Binary),
        AttrSpec::new(19, "STA_SUPPORTED_RATES", AttrKind::Binary),
        AttrSpec::new(20, "STA_VLAN", AttrKind::Binary),
        AttrSpec::new(21, "STA_INFO", AttrKind::Binary),
        AttrSpec::new(22, "WIPHY_BANDS", AttrKind::Sequence(&BAND)),
        AttrSpec::new(23, "MNTR_FLAGS", AttrKind::Binary),
        AttrSpec::new(24, "MESH_ID", AttrKind::Binary),
        AttrSpec::new(25, "STA_PLINK_ACTION", AttrKind::Binary),
        AttrSpec::new(26, "MPATH_NEXT_HOP", AttrKind::Binary),
        AttrSpec::new(27, "MPATH_INFO", AttrKind::Binary),
        AttrSpec::new(28, "BSS_CTS_PROT", AttrKind::Binary),
        AttrSpec::new(29, "BSS_SHORT_PREAMBLE", AttrKind::Binary),
        AttrSpec::new(30, "BSS_SHORT_SLOT_TIME", AttrKind::Binary),
        AttrSpec::new(31, "HT_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(32, "SUPPORTED_IFTYPES", AttrKind::Binary),
        AttrSpec::new(33, "REG_ALPHA2", AttrKind::Binary),
        AttrSpec::new(34, "REG_RULES", AttrKind::Binary),
        AttrSpec::new(35, "MESH_CONFIG", AttrKind::Binary),
        AttrSpec::new(36, "BSS_BASIC_RATES", AttrKind::Binary),
        AttrSpec::new(37, "WIPHY_TXQ_PARAMS", AttrKind::Binary),
        AttrSpec::new(38, "WIPHY_FREQ", AttrKind::U32),
        AttrSpec::new(39, "WIPHY_CHANNEL_TYPE", AttrKind::U32),
        AttrSpec::new(40, "KEY_DEFAULT_MGMT", AttrKind::Binary),
        AttrSpec::new(41, "MGMT_SUBTYPE", AttrKind::Binary),
        AttrSpec::new(42, "IE", AttrKind::Binary),
        AttrSpec::new(43, "MAX_NUM_SCAN_SSIDS", AttrKind::U8),
        AttrSpec::new(44, "SCAN_FREQUENCIES", AttrKind::Binary),
        AttrSpec::new(45, "SCAN_SSIDS", AttrKind::Binary),
        AttrSpec::new(46, "GENERATION", AttrKind::U32),
        AttrSpec::new(47, "BSS", AttrKind::Binary),
        AttrSpec::new(48, "REG_INITIATOR", AttrKind::Binary),
        AttrSpec::new(49, "REG_TYPE", AttrKind::Binary),
        AttrSpec::new(50, "SUPPORTED_COMMANDS", AttrKind::Binary),
        AttrSpec::new(51, "FRAME", AttrKind::Binary),
        AttrSpec::new(52, "SSID", AttrKind::Binary),
        AttrSpec::new(53, "AUTH_TYPE", AttrKind::Binary),
        AttrSpec::new(54, "REASON_CODE", AttrKind::Binary),
        AttrSpec::new(55, "KEY_TYPE", AttrKind::Binary),
        AttrSpec::new(56, "MAX_SCAN_IE_LEN", AttrKind::U16),
        AttrSpec::new(57, "CIPHER_SUITES", AttrKind::Binary),
        AttrSpec::new(58, "FREQ_BEFORE", AttrKind::Binary),
        AttrSpec::new(59, "FREQ_AFTER", AttrKind::Binary),
        AttrSpec::new(60, "FREQ_FIXED", AttrKind::Binary),
        AttrSpec::new(61, "WIPHY_RETRY_SHORT", AttrKind::U8),
        AttrSpec::new(62, "WIPHY_RETRY_LONG", AttrKind::U8),
        AttrSpec::new(63, "WIPHY_FRAG_THRESHOLD", AttrKind::U32),
        AttrSpec::new(64, "WIPHY_RTS_THRESHOLD", AttrKind::U32),
        AttrSpec::new(65, "TIMED_OUT", AttrKind::Binary),
        AttrSpec::new(66, "USE_MFP", AttrKind::Binary),
        AttrSpec::new(67, "STA_FLAGS2", AttrKind::Binary),
        AttrSpec::new(68, "CONTROL_PORT", AttrKind::Binary),
        AttrSpec::new(69, "TESTDATA", AttrKind::Binary),
        AttrSpec::new(70, "PRIVACY", AttrKind::Binary),
        AttrSpec::new(71, "DISCONNECTED_BY_AP", AttrKind::Binary),
        AttrSpec::new(72, "STATUS_CODE", AttrKind::Binary),
        AttrSpec::new(73, "CIPHER_SUITES_PAIRWISE", AttrKind::Binary),
        AttrSpec::new(74, "CIPHER_SUITE_GROUP", AttrKind::Binary),
        AttrSpec::new(75, "WPA_VERSIONS", AttrKind::Binary),
        AttrSpec::new(76, "AKM_SUITES", AttrKind::Binary),
        AttrSpec::new(77, "REQ_IE", AttrKind::Binary),
        AttrSpec::new(78, "RESP_IE", AttrKind::Binary),
        AttrSpec::new(79, "PREV_BSSID", AttrKind::Binary),
        AttrSpec::new(80, "KEY", AttrKind::Binary),
        AttrSpec::new(81, "KEYS", AttrKind::Binary),
        AttrSpec::new(82, "PID", AttrKind::Binary),
        AttrSpec::new(83, "4ADDR", AttrKind::U8),
        AttrSpec::new(84, "SURVEY_INFO", AttrKind::Binary),
        AttrSpec::new(85, "PMKID", AttrKind::Binary),
        AttrSpec::new(86, "MAX_NUM_PMKIDS", AttrKind::Binary),
        AttrSpec::new(87, "DURATION", AttrKind::Binary),
        AttrSpec::new(88, "COOKIE", AttrKind::Binary),
        AttrSpec::new(89, "WIPHY_COVERAGE_CLASS", AttrKind::U8),
        AttrSpec::new(90, "TX_RATES", AttrKind::Binary),
        AttrSpec::new(91, "FRAME_MATCH", AttrKind::Binary),
        AttrSpec::new(92, "ACK", AttrKind::Binary),
        AttrSpec::new(93, "PS_STATE", AttrKind::Binary),
        AttrSpec::new(94, "CQM", AttrKind::Binary),
        AttrSpec::new(95, "LOCAL_STATE_CHANGE", AttrKind::Binary),
        AttrSpec::new(96, "AP_ISOLATE", AttrKind::Binary),
        AttrSpec::new(97, "WIPHY_TX_POWER_SETTING", AttrKind::Binary),
        AttrSpec::new(98, "WIPHY_TX_POWER_LEVEL", AttrKind::U32),
        AttrSpec::new(99, "TX_FRAME_TYPES", AttrKind::Binary),
        AttrSpec::new(100, "RX_FRAME_TYPES", AttrKind::Binary),
        AttrSpec::new(101, "FRAME_TYPE", AttrKind::Binary),
        AttrSpec::new(102, "CONTROL_PORT_ETHERTYPE", AttrKind::Flag),
        AttrSpec::new(103, "CONTROL_PORT_NO_ENCRYPT", AttrKind::Binary),
        AttrSpec::new(104, "SUPPORT_IBSS_RSN", AttrKind::Flag),
        AttrSpec::new(105, "WIPHY_ANTENNA_TX", AttrKind::U32),
        AttrSpec::new(106, "WIPHY_ANTENNA_RX", AttrKind::U32),
        AttrSpec::new(107, "MCAST_RATE", AttrKind::Binary),
        AttrSpec::new(108, "OFFCHANNEL_TX_OK", AttrKind::Flag),
        AttrSpec::new(109, "BSS_HT_OPMODE", AttrKind::Binary),
        AttrSpec::new(110, "KEY_DEFAULT_TYPES", AttrKind::Binary),
        AttrSpec::new(111, "MAX_REMAIN_ON_CHANNEL_DURATION", AttrKind::U32),
        AttrSpec::new(112, "MESH_SETUP", AttrKind::Binary),
        AttrSpec::new(113, "WIPHY_ANTENNA_AVAIL_TX", AttrKind::U32),
        AttrSpec::new(114, "WIPHY_ANTENNA_AVAIL_RX", AttrKind::U32),
        AttrSpec::new(115, "SUPPORT_MESH_AUTH", AttrKind::Flag),
        AttrSpec::new(116, "STA_PLINK_STATE", AttrKind::Binary),
        AttrSpec::new(117, "WOWLAN_TRIGGERS", AttrKind::Binary),
        AttrSpec::new(118, "WOWLAN_TRIGGERS_SUPPORTED", AttrKind::Binary),
        AttrSpec::new(119, "SCHED_SCAN_INTERVAL", AttrKind::Binary),
        AttrSpec::new(120, "INTERFACE_COMBINATIONS", AttrKind::Binary),
        AttrSpec::new(121, "SOFTWARE_IFTYPES", AttrKind::Binary),
        AttrSpec::new(122, "REKEY_DATA", AttrKind::Binary),
        AttrSpec::new(123, "MAX_NUM_SCHED_SCAN_SSIDS", AttrKind::U8),
        AttrSpec::new(124, "MAX_SCHED_SCAN_IE_LEN", AttrKind::U16),
        AttrSpec::new(125, "SCAN_SUPP_RATES", AttrKind::Binary),
        AttrSpec::new(126, "HIDDEN_SSID", AttrKind::Binary),
        AttrSpec::new(127, "IE_PROBE_RESP", AttrKind::Binary),
        AttrSpec::new(128, "IE_ASSOC_RESP", AttrKind::Binary),
        AttrSpec::new(129, "STA_WME", AttrKind::Binary),
        AttrSpec::new(130, "SUPPORT_AP_UAPSD", AttrKind::Flag),
        AttrSpec::new(131, "ROAM_SUPPORT", AttrKind::Flag),
        AttrSpec::new(132, "SCHED_SCAN_MATCH", AttrKind::Binary),
        AttrSpec::new(133, "MAX_MATCH_SETS", AttrKind::U8),
        AttrSpec::new(134, "PMKSA_CANDIDATE", AttrKind::Binary),
        AttrSpec::new(135, "TX_NO_CCK_RATE", AttrKind::Binary),
        AttrSpec::new(136, "TDLS_ACTION", AttrKind::Binary),
        AttrSpec::new(137, "TDLS_DIALOG_TOKEN", AttrKind::Binary),
        AttrSpec::new(138, "TDLS_OPERATION", AttrKind::Binary),
        AttrSpec::new(139, "TDLS_SUPPORT", AttrKind::Flag),
        AttrSpec::new(140, "TDLS_EXTERNAL_SETUP", AttrKind::Flag),
        AttrSpec::new(141, "DEVICE_AP_SME", AttrKind::U32),
        AttrSpec::new(142, "DONT_WAIT_FOR_ACK", AttrKind::Binary),
        AttrSpec::new(143, "FEATURE_FLAGS", AttrKind::U32),
        AttrSpec::new(144, "PROBE_RESP_OFFLOAD", AttrKind::U32),
        AttrSpec::new(145, "PROBE_RESP", AttrKind::Binary),
        AttrSpec::new(146, "DFS_REGION", AttrKind::Binary),
        AttrSpec::new(147, "DISABLE_HT", AttrKind::Binary),
        AttrSpec::new(148, "HT_CAPABILITY_MASK", AttrKind::Binary),
        AttrSpec::new(149, "NOACK_MAP", AttrKind::Binary),
        AttrSpec::new(150, "INACTIVITY_TIMEOUT", AttrKind::Binary),
        AttrSpec::new(151, "RX_SIGNAL_DBM", AttrKind::Binary),
        AttrSpec::new(152, "BG_SCAN_PERIOD", AttrKind::Binary),
        AttrSpec::new(153, "WDEV", AttrKind::U64),
        AttrSpec::new(154, "USER_REG_HINT_TYPE", AttrKind::Binary),
        AttrSpec::new(155, "CONN_FAILED_REASON", AttrKind::Binary),
        AttrSpec::new(156, "AUTH_DATA", AttrKind::Binary),
        AttrSpec::new(157, "VHT_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(158, "SCAN_FLAGS", AttrKind::Binary),
        AttrSpec::new(159, "CHANNEL_WIDTH", AttrKind::U32),
        AttrSpec::new(160, "CENTER_FREQ1", AttrKind::U32),
        AttrSpec::new(161, "CENTER_FREQ2", AttrKind::U32),
        AttrSpec::new(162, "P2P_CTWINDOW", AttrKind::Binary),
        AttrSpec::new(163, "P2P_OPPPS", AttrKind::Binary),
        AttrSpec::new(164, "LOCAL_MESH_POWER_MODE", AttrKind::Binary),
        AttrSpec::new(165, "ACL_POLICY", AttrKind::Binary),
        AttrSpec::new(166, "MAC_ADDRS", AttrKind::Binary),
        AttrSpec::new(167, "MAC_ACL_MAX", AttrKind::U32),
        AttrSpec::new(168, "RADAR_EVENT", AttrKind::Binary),
        AttrSpec::new(169, "EXT_CAPA", AttrKind::Binary),
        AttrSpec::new(170, "EXT_CAPA_MASK", AttrKind::Binary),
        AttrSpec::new(171, "STA_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(172, "STA_EXT_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(173, "PROTOCOL_FEATURES", AttrKind::Binary),
        AttrSpec::new(174, "SPLIT_WIPHY_DUMP", AttrKind::Flag),
        AttrSpec::new(175, "DISABLE_VHT", AttrKind::Binary),
        AttrSpec::new(176, "VHT_CAPABILITY_MASK", AttrKind::Binary),
        AttrSpec::new(177, "MDID", AttrKind::Binary),
        AttrSpec::new(178, "IE_RIC", AttrKind::Binary),
        AttrSpec::new(179, "CRIT_PROT_ID", AttrKind::Binary),
        AttrSpec::new(180, "MAX_CRIT_PROT_DURATION", AttrKind::Binary),
        AttrSpec::new(181, "PEER_AID", AttrKind::Binary),
        AttrSpec::new(182, "COALESCE_RULE", AttrKind::Binary),
        AttrSpec::new(183, "CH_SWITCH_COUNT", AttrKind::Binary),
        AttrSpec::new(184, "CH_SWITCH_BLOCK_TX", AttrKind::Binary),
        AttrSpec::new(185, "CSA_IES", AttrKind::Binary),
        AttrSpec::new(186, "CNTDWN_OFFS_BEACON", AttrKind::Binary),
        AttrSpec::new(187, "CNTDWN_OFFS_PRESP", AttrKind::Binary),
        AttrSpec::new(188, "RXMGMT_FLAGS", AttrKind::Binary),
        AttrSpec::new(189, "STA_SUPPORTED_CHANNELS", AttrKind::Binary),
        AttrSpec::new(190, "STA_SUPPORTED_OPER_CLASSES", AttrKind::Binary),
        AttrSpec::new(191, "HANDLE_DFS", AttrKind::Binary),
        AttrSpec::new(192, "SUPPORT_5_MHZ", AttrKind::Flag),
        AttrSpec::new(193, "SUPPORT_10_MHZ", AttrKind::Flag),
        AttrSpec::new(194, "OPMODE_NOTIF", AttrKind::Binary),
        AttrSpec::new(195, "VENDOR_ID", AttrKind::Binary),
        AttrSpec::new(196, "VENDOR_SUBCMD", AttrKind::Binary),
        AttrSpec::new(197, "VENDOR_DATA", AttrKind::Binary),
        AttrSpec::new(198, "VENDOR_EVENTS", AttrKind::Binary),
        AttrSpec::new(199, "QOS_MAP", AttrKind::Binary),
        AttrSpec::new(200, "MAC_HINT", AttrKind::Binary),
        AttrSpec::new(201, "WIPHY_FREQ_HINT", AttrKind::Binary),
        AttrSpec::new(202, "MAX_AP_ASSOC_STA", AttrKind::U32),
        AttrSpec::new(203, "TDLS_PEER_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(204, "SOCKET_OWNER", AttrKind::Flag),
        AttrSpec::new(205, "CSA_C_OFF_TX", AttrKind::Binary),
        AttrSpec::new(206, "MAX_CSA_COUNTERS", AttrKind::U8),
        AttrSpec::new(207, "TDLS_INITIATOR", AttrKind::Binary),
        AttrSpec::new(208, "USE_RRM", AttrKind::Binary),
        AttrSpec::new(209, "WIPHY_DYN_ACK", AttrKind::Binary),
        AttrSpec::new(210, "TSID", AttrKind::Binary),
        AttrSpec::new(211, "USER_PRIO", AttrKind::Binary),
        AttrSpec::new(212, "ADMITTED_TIME", AttrKind::Binary),
        AttrSpec::new(213, "SMPS_MODE", AttrKind::Binary),
        AttrSpec::new(214, "OPER_CLASS", AttrKind::Binary),
        AttrSpec::new(215, "MAC_MASK", AttrKind::Binary),
        AttrSpec::new(216, "WIPHY_SELF_MANAGED_REG", AttrKind::Flag),
        AttrSpec::new(217, "EXT_FEATURES", AttrKind::Binary),
        AttrSpec::new(218, "SURVEY_RADIO_STATS", AttrKind::Binary),
        AttrSpec::new(219, "NETNS_FD", AttrKind::Binary),
        AttrSpec::new(220, "SCHED_SCAN_DELAY", AttrKind::Binary),
        AttrSpec::new(221, "REG_INDOOR", AttrKind::Binary),
        AttrSpec::new(222, "MAX_NUM_SCHED_SCAN_PLANS", AttrKind::Binary),
        AttrSpec::new(223, "MAX_SCAN_PLAN_INTERVAL", AttrKind::Binary),
        AttrSpec::new(224, "MAX_SCAN_PLAN_ITERATIONS", AttrKind::Binary),
        AttrSpec::new(225, "SCHED_SCAN_PLANS", AttrKind::Binary),
        AttrSpec::new(226, "PBSS", AttrKind::Binary),
        AttrSpec::new(227, "BSS_SELECT", AttrKind::Binary),
        AttrSpec::new(228, "STA_SUPPORT_P2P_PS", AttrKind::Binary),
        AttrSpec::new(229, "PAD", AttrKind::Binary),
        AttrSpec::new(230, "IFTYPE_EXT_CAPA", AttrKind::Binary),
        AttrSpec::new(231, "MU_MIMO_GROUP_DATA", AttrKind::Binary),
        AttrSpec::new(232, "MU_MIMO_FOLLOW_MAC_ADDR", AttrKind::Binary),
        AttrSpec::new(233, "SCAN_START_TIME_TSF", AttrKind::Binary),
        AttrSpec::new(234, "SCAN_START_TIME_TSF_BSSID", AttrKind::Binary),
        AttrSpec::new(235, "MEASUREMENT_DURATION", AttrKind::Binary),
        AttrSpec::new(236, "MEASUREMENT_DURATION_MANDATORY", AttrKind::Binary),
        AttrSpec::new(237, "MESH_PEER_AID", AttrKind::Binary),
        AttrSpec::new(238, "NAN_MASTER_PREF", AttrKind::Binary),
        AttrSpec::new(239, "BANDS", AttrKind::Binary),
        AttrSpec::new(240, "NAN_FUNC", AttrKind::Binary),
        AttrSpec::new(241, "NAN_MATCH", AttrKind::Binary),
        AttrSpec::new(242, "FILS_KEK", AttrKind::Binary),
        AttrSpec::new(243, "FILS_NONCES", AttrKind::Binary),
        AttrSpec::new(244, "MULTICAST_TO_UNICAST_ENABLED", AttrKind::Binary),
        AttrSpec::new(245, "BSSID", AttrKind::Binary),
        AttrSpec::new(246, "SCHED_SCAN_RELATIVE_RSSI", AttrKind::Binary),
        AttrSpec::new(247, "SCHED_SCAN_RSSI_ADJUST", AttrKind::Binary),
        AttrSpec::new(248, "TIMEOUT_REASON", AttrKind::Binary),
        AttrSpec::new(249, "FILS_ERP_USERNAME", AttrKind::Binary),
        AttrSpec::new(250, "FILS_ERP_REALM", AttrKind::Binary),
        AttrSpec::new(251, "FILS_ERP_NEXT_SEQ_NUM", AttrKind::Binary),
        AttrSpec::new(252, "FILS_ERP_RRK", AttrKind::Binary),
        AttrSpec::new(253, "FILS_CACHE_ID", AttrKind::Binary),
        AttrSpec::new(254, "PMK", AttrKind::Binary),
        AttrSpec::new(255, "SCHED_SCAN_MULTI", AttrKind::Binary),
        AttrSpec::new(256, "SCHED_SCAN_MAX_REQS", AttrKind::Binary),
        AttrSpec::new(257, "WANT_1X_4WAY_HS", AttrKind::Binary),
        AttrSpec::new(258, "PMKR0_NAME", AttrKind::Binary),
        AttrSpec::new(259, "PORT_AUTHORIZED", AttrKind::Binary),
        AttrSpec::new(260, "EXTERNAL_AUTH_ACTION", AttrKind::Binary),
        AttrSpec::new(261, "EXTERNAL_AUTH_SUPPORT", AttrKind::Binary),
        AttrSpec::new(262, "NSS", AttrKind::Binary),
        AttrSpec::new(263, "ACK_SIGNAL", AttrKind::Binary),
        AttrSpec::new(264, "CONTROL_PORT_OVER_NL80211", AttrKind::Binary),
        AttrSpec::new(265, "TXQ_STATS", AttrKind::Binary),
        AttrSpec::new(266, "TXQ_LIMIT", AttrKind::Binary),
        AttrSpec::new(267, "TXQ_MEMORY_LIMIT", AttrKind::Binary),
        AttrSpec::new(268, "TXQ_QUANTUM", AttrKind::Binary),
        AttrSpec::new(269, "HE_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(270, "FTM_RESPONDER", AttrKind::Binary),
        AttrSpec::new(271, "FTM_RESPONDER_STATS", AttrKind::Binary),
        AttrSpec::new(272, "TIMEOUT", AttrKind::Binary),
        AttrSpec::new(273, "PEER_MEASUREMENTS", AttrKind::Binary),
        AttrSpec::new(274, "AIRTIME_WEIGHT", AttrKind::Binary),
        AttrSpec::new(275, "STA_TX_POWER_SETTING", AttrKind::Binary),
        AttrSpec::new(276, "STA_TX_POWER", AttrKind::Binary),
        AttrSpec::new(277, "SAE_PASSWORD", AttrKind::Binary),
        AttrSpec::new(278, "TWT_RESPONDER", AttrKind::Binary),
        AttrSpec::new(279, "HE_OBSS_PD", AttrKind::Binary),
        AttrSpec::new(280, "WIPHY_EDMG_CHANNELS", AttrKind::Binary),
        AttrSpec::new(281, "WIPHY_EDMG_BW_CONFIG", AttrKind::Binary),
        AttrSpec::new(282, "VLAN_ID", AttrKind::Binary),
        AttrSpec::new(283, "HE_BSS_COLOR", AttrKind::Binary),
        AttrSpec::new(284, "IFTYPE_AKM_SUITES", AttrKind::Binary),
        AttrSpec::new(285, "TID_CONFIG", AttrKind::Binary),
        AttrSpec::new(286, "CONTROL_PORT_NO_PREAUTH", AttrKind::Binary),
        AttrSpec::new(287, "PMK_LIFETIME", AttrKind::Binary),
        AttrSpec::new(288, "PMK_REAUTH_THRESHOLD", AttrKind::Binary),
        AttrSpec::new(289, "RECEIVE_MULTICAST", AttrKind::Binary),
        AttrSpec::new(290, "WIPHY_FREQ_OFFSET", AttrKind::U32),
        AttrSpec::new(291, "CENTER_FREQ1_OFFSET", AttrKind::Binary),
        AttrSpec::new(292, "SCAN_FREQ_KHZ", AttrKind::Binary),
        AttrSpec::new(293, "HE_6GHZ_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(294, "FILS_DISCOVERY", AttrKind::Binary),
        AttrSpec::new(295, "UNSOL_BCAST_PROBE_RESP", AttrKind::Binary),
        AttrSpec::new(296, "S1G_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(297, "S1G_CAPABILITY_MASK", AttrKind::Binary),
        AttrSpec::new(298, "SAE_PWE", AttrKind::Binary),
        AttrSpec::new(299, "RECONNECT_REQUESTED", AttrKind::Binary),
        AttrSpec::new(300, "SAR_SPEC", AttrKind::Binary),
        AttrSpec::new(301, "DISABLE_HE", AttrKind::Binary),
        AttrSpec::new(302, "OBSS_COLOR_BITMAP", AttrKind::Binary),
        AttrSpec::new(303, "COLOR_CHANGE_COUNT", AttrKind::Binary),
        AttrSpec::new(304, "COLOR_CHANGE_COLOR", AttrKind::Binary),
        AttrSpec::new(305, "COLOR_CHANGE_ELEMS", AttrKind::Binary),
        AttrSpec::new(306, "MBSSID_CONFIG", AttrKind::Binary),
        AttrSpec::new(307, "MBSSID_ELEMS", AttrKind::Binary),
        AttrSpec::new(308, "RADAR_BACKGROUND", AttrKind::Binary),
        AttrSpec::new(309, "AP_SETTINGS_FLAGS", AttrKind::Binary),
        AttrSpec::new(310, "EHT_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(311, "DISABLE_EHT", AttrKind::Binary),
        AttrSpec::new(312, "MLO_LINKS", AttrKind::Binary),
        AttrSpec::new(313, "MLO_LINK_ID", AttrKind::Binary),
        AttrSpec::new(314, "MLD_ADDR", AttrKind::Binary),
        AttrSpec::new(315, "MLO_SUPPORT", AttrKind::Binary),
        AttrSpec::new(316, "MAX_NUM_AKM_SUITES", AttrKind::U16),
        AttrSpec::new(317, "EML_CAPABILITY", AttrKind::Binary),
        AttrSpec::new(318, "MLD_CAPA_AND_OPS", AttrKind::Binary),
        AttrSpec::new(319, "TX_HW_TIMESTAMP", AttrKind::Binary),
        AttrSpec::new(320, "RX_HW_TIMESTAMP", AttrKind::Binary),
        AttrSpec::new(321, "TD_BITMAP", AttrKind::Binary),
        AttrSpec::new(322, "PUNCT_BITMAP", AttrKind::Binary),
        AttrSpec::new(323, "MAX_HW_TIMESTAMP_PEERS", AttrKind::Binary),
        AttrSpec::new(324, "HW_TIMESTAMP_ENABLED", AttrKind::Binary),
        AttrSpec::new(325, "EMA_RNR_ELEMS", AttrKind::Binary),
        AttrSpec::new(326, "MLO_LINK_DISABLED", AttrKind::Binary),
        AttrSpec::new(327, "BSS_DUMP_INCLUDE_USE_DATA", AttrKind::Binary),
        AttrSpec::new(328, "MLO_TTLM_DLINK", AttrKind::Binary),
        AttrSpec::new(329, "MLO_TTLM_ULINK", AttrKind::Binary),
        AttrSpec::new(330, "ASSOC_SPP_AMSDU", AttrKind::Binary),
        AttrSpec::new(331, "WIPHY_RADIOS", AttrKind::Binary),
        AttrSpec::new(332, "WIPHY_INTERFACE_COMBINATIONS", AttrKind::Binary),
        AttrSpec::new(333, "VIF_RADIO_MASK", AttrKind::Binary),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted_and_unique() {
        for policy in [&NL80211_ATTR, &BAND, &FREQUENCY_ATTR, &BITRATE_ATTR] {
            assert!(
                policy.attrs.windows(2).all(|w| w[0].id < w[1].id),
                "{} is not sorted",
                policy.prefix
            );
        }
    }

    #[test]
    fn test_well_known_ids() {
        assert_eq!(NL80211_ATTR.name_of(2), "WIPHY_NAME");
        assert_eq!(NL80211_ATTR.name_of(22), "WIPHY_BANDS");
        assert_eq!(NL80211_ATTR.name_of(192), "SUPPORT_5_MHZ");
        assert_eq!(NL80211_ATTR.name_of(322), "PUNCT_BITMAP");
        assert_eq!(BAND.name_of(4), "HT_CAPA");
        assert_eq!(FREQUENCY_ATTR.name_of(1), "FREQ");
    }

    #[test]
    fn test_top_level_is_dense() {
        let last = NL80211_ATTR.attrs.last().map(|s| s.id).unwrap_or(0);
        assert_eq!(NL80211_ATTR.attrs.len(), last as usize);
    }
}
