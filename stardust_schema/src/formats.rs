//! Fixed column tables of the Stardust feeds.

use crate::{SchemaDescriptor, SchemaError, SchemaPolicy, derive_schema};

/// Columns of the narrow SNMP interface feed, in file order.
pub const NARROW_COLUMNS: &[&str] = &[
    "values.if_in_bits.delta",
    "values.if_out_bits.delta",
    "values.in_bcast_pkts.delta",
    "values.out_bcast_pkts.delta",
    "values.in_bits.delta",
    "values.out_bits.delta",
    "values.in_discards.delta",
    "values.out_discards.delta",
    "values.in_errors.delta",
    "values.out_errors.delta",
    "values.in_mcast_pkts.delta",
    "values.out_mcast_pkts.delta",
    "values.in_ucast_pkts.delta",
    "values.out_ucast_pkts.delta",
    "@timestamp",
    "@processing_time",
    "@exit_time",
    "@collect_time_min",
    "meta.if_oper_status",
    "meta.device",
    "meta.if_admin_status",
    "meta.oper_status",
    "meta.descr",
    "meta.speed",
    "meta.alias",
    "meta.device_info.state",
    "meta.device_info.os",
    "meta.device_info.loc_name",
    "meta.device_info.loc_type",
    "meta.device_info.location.lat",
    "meta.device_info.location.lon",
    "meta.device_info.network",
    "meta.device_info.role",
    "meta.admin_status",
    "meta.name",
    "meta.intercloud",
    "meta.port_mode",
    "meta.ifindex",
];

/// Columns of the wide SNMP interface feed, in file order.
///
/// Every counter carries `delta`, `rate` and `val` columns, followed by the
/// timestamps and the interface metadata.
pub const WIDE_COLUMNS: &[&str] = &[
    "values.in_bits.delta",
    "values.in_bits.rate",
    "values.in_bits.val",
    "values.in_dropped_hi_bits.delta",
    "values.in_dropped_hi_bits.rate",
    "values.in_dropped_hi_bits.val",
    "values.in_dropped_hi_pkts.delta",
    "values.in_dropped_hi_pkts.rate",
    "values.in_dropped_hi_pkts.val",
    "values.in_dropped_lo_bits.delta",
    "values.in_dropped_lo_bits.rate",
    "values.in_dropped_lo_bits.val",
    "values.in_dropped_lo_pkts.delta",
    "values.in_dropped_lo_pkts.rate",
    "values.in_dropped_lo_pkts.val",
    "values.in_fwd_inprof_bits.delta",
    "values.in_fwd_inprof_bits.rate",
    "values.in_fwd_inprof_bits.val",
    "values.in_fwd_inprof_pkts.delta",
    "values.in_fwd_inprof_pkts.rate",
    "values.in_fwd_inprof_pkts.val",
    "values.in_fwd_outprof_bits.delta",
    "values.in_fwd_outprof_bits.rate",
    "values.in_fwd_outprof_bits.val",
    "values.in_fwd_outprof_pkts.delta",
    "values.in_fwd_outprof_pkts.rate",
    "values.in_fwd_outprof_pkts.val",
    "values.in_mpls_bits.delta",
    "values.in_mpls_bits.rate",
    "values.in_mpls_bits.val",
    "values.in_pkts.delta",
    "values.in_pkts.rate",
    "values.in_pkts.val",
    "values.in_v4_bits.delta",
    "values.in_v4_bits.rate",
    "values.in_v4_bits.val",
    "values.in_v4_pkts.delta",
    "values.in_v4_pkts.rate",
    "values.in_v4_pkts.val",
    "values.in_v6_bits.delta",
    "values.in_v6_bits.rate",
    "values.in_v6_bits.val",
    "values.in_v6_pkts.delta",
    "values.in_v6_pkts.rate",
    "values.in_v6_pkts.val",
    "values.out_bits.delta",
    "values.out_bits.rate",
    "values.out_bits.val",
    "values.out_dropped_inprof_bits.delta",
    "values.out_dropped_inprof_bits.rate",
    "values.out_dropped_inprof_bits.val",
    "values.out_dropped_inprof_pkts.delta",
    "values.out_dropped_inprof_pkts.rate",
    "values.out_dropped_inprof_pkts.val",
    "values.out_dropped_outprof_bits.delta",
    "values.out_dropped_outprof_bits.rate",
    "values.out_dropped_outprof_bits.val",
    "values.out_dropped_outprof_pkts.delta",
    "values.out_dropped_outprof_pkts.rate",
    "values.out_dropped_outprof_pkts.val",
    "values.out_fwd_inprof_bits.delta",
    "values.out_fwd_inprof_bits.rate",
    "values.out_fwd_inprof_bits.val",
    "values.out_fwd_inprof_pkts.delta",
    "values.out_fwd_inprof_pkts.rate",
    "values.out_fwd_inprof_pkts.val",
    "values.out_fwd_outprof_bits.delta",
    "values.out_fwd_outprof_bits.rate",
    "values.out_fwd_outprof_bits.val",
    "values.out_fwd_outprof_pkts.delta",
    "values.out_fwd_outprof_pkts.rate",
    "values.out_fwd_outprof_pkts.val",
    "values.out_mpls_bits.delta",
    "values.out_mpls_bits.rate",
    "values.out_mpls_bits.val",
    "values.out_pkts.delta",
    "values.out_pkts.rate",
    "values.out_pkts.val",
    "values.out_v4_bits.delta",
    "values.out_v4_bits.rate",
    "values.out_v4_bits.val",
    "values.out_v4_discard_bits.delta",
    "values.out_v4_discard_bits.rate",
    "values.out_v4_discard_bits.val",
    "values.out_v4_discard_pkts.delta",
    "values.out_v4_discard_pkts.rate",
    "values.out_v4_discard_pkts.val",
    "values.out_v4_pkts.delta",
    "values.out_v4_pkts.rate",
    "values.out_v4_pkts.val",
    "values.out_v6_bits.delta",
    "values.out_v6_bits.rate",
    "values.out_v6_bits.val",
    "values.out_v6_discard_bits.delta",
    "values.out_v6_discard_bits.rate",
    "values.out_v6_discard_bits.val",
    "values.out_v6_discard_pkts.delta",
    "values.out_v6_discard_pkts.rate",
    "values.out_v6_discard_pkts.val",
    "values.out_v6_pkts.delta",
    "values.out_v6_pkts.rate",
    "values.out_v6_pkts.val",
    "values.queue1.sap_in_dropped_hiprio_bits.delta",
    "values.queue1.sap_in_dropped_hiprio_bits.rate",
    "values.queue1.sap_in_dropped_hiprio_bits.val",
    "values.queue1.sap_in_dropped_hiprio_pkts.delta",
    "values.queue1.sap_in_dropped_hiprio_pkts.rate",
    "values.queue1.sap_in_dropped_hiprio_pkts.val",
    "values.queue1.sap_in_dropped_loprio_bits.delta",
    "values.queue1.sap_in_dropped_loprio_bits.rate",
    "values.queue1.sap_in_dropped_loprio_bits.val",
    "values.queue1.sap_in_dropped_loprio_pkts.delta",
    "values.queue1.sap_in_dropped_loprio_pkts.rate",
    "values.queue1.sap_in_dropped_loprio_pkts.val",
    "values.queue1.sap_in_fwd_inprof_bits.delta",
    "values.queue1.sap_in_fwd_inprof_bits.rate",
    "values.queue1.sap_in_fwd_inprof_bits.val",
    "values.queue1.sap_in_fwd_inprof_pkts.delta",
    "values.queue1.sap_in_fwd_inprof_pkts.rate",
    "values.queue1.sap_in_fwd_inprof_pkts.val",
    "values.queue1.sap_in_fwd_outprof_bits.delta",
    "values.queue1.sap_in_fwd_outprof_bits.rate",
    "values.queue1.sap_in_fwd_outprof_bits.val",
    "values.queue1.sap_in_fwd_outprof_pkts.delta",
    "values.queue1.sap_in_fwd_outprof_pkts.rate",
    "values.queue1.sap_in_fwd_outprof_pkts.val",
    "values.queue1.sap_in_offered_hiprio_bits.delta",
    "values.queue1.sap_in_offered_hiprio_bits.rate",
    "values.queue1.sap_in_offered_hiprio_bits.val",
    "values.queue1.sap_in_offered_hiprio_pkts.delta",
    "values.queue1.sap_in_offered_hiprio_pkts.rate",
    "values.queue1.sap_in_offered_hiprio_pkts.val",
    "values.queue1.sap_in_offered_loprio_bits.delta",
    "values.queue1.sap_in_offered_loprio_bits.rate",
    "values.queue1.sap_in_offered_loprio_bits.val",
    "values.queue1.sap_in_offered_loprio_pkts.delta",
    "values.queue1.sap_in_offered_loprio_pkts.rate",
    "values.queue1.sap_in_offered_loprio_pkts.val",
    "values.queue1.sap_in_offered_uncolored_bits.delta",
    "values.queue1.sap_in_offered_uncolored_bits.rate",
    "values.queue1.sap_in_offered_uncolored_bits.val",
    "values.queue1.sap_in_offered_uncolored_pkts.delta",
    "values.queue1.sap_in_offered_uncolored_pkts.rate",
    "values.queue1.sap_in_offered_uncolored_pkts.val",
    "values.queue1.sap_out_dropped_inprof_bits.delta",
    "values.queue1.sap_out_dropped_inprof_bits.rate",
    "values.queue1.sap_out_dropped_inprof_bits.val",
    "values.queue1.sap_out_dropped_inprof_pkts.delta",
    "values.queue1.sap_out_dropped_inprof_pkts.rate",
    "values.queue1.sap_out_dropped_inprof_pkts.val",
    "values.queue1.sap_out_dropped_outprof_bits.delta",
    "values.queue1.sap_out_dropped_outprof_bits.rate",
    "values.queue1.sap_out_dropped_outprof_bits.val",
    "values.queue1.sap_out_dropped_outprof_pkts.delta",
    "values.queue1.sap_out_dropped_outprof_pkts.rate",
    "values.queue1.sap_out_dropped_outprof_pkts.val",
    "values.queue1.sap_out_fwd_inprof_bits.delta",
    "values.queue1.sap_out_fwd_inprof_bits.rate",
    "values.queue1.sap_out_fwd_inprof_bits.val",
    "values.queue1.sap_out_fwd_inprof_pkts.delta",
    "values.queue1.sap_out_fwd_inprof_pkts.rate",
    "values.queue1.sap_out_fwd_inprof_pkts.val",
    "values.queue1.sap_out_fwd_outprof_bits.delta",
    "values.queue1.sap_out_fwd_outprof_bits.rate",
    "values.queue1.sap_out_fwd_outprof_bits.val",
    "values.queue1.sap_out_fwd_outprof_pkts.delta",
    "values.queue1.sap_out_fwd_outprof_pkts.rate",
    "values.queue1.sap_out_fwd_outprof_pkts.val",
    "values.queue2.sap_in_dropped_hiprio_bits.delta",
    "values.queue2.sap_in_dropped_hiprio_bits.rate",
    "values.queue2.sap_in_dropped_hiprio_bits.val",
    "values.queue2.sap_in_dropped_hiprio_pkts.delta",
    "values.queue2.sap_in_dropped_hiprio_pkts.rate",
    "values.queue2.sap_in_dropped_hiprio_pkts.val",
    "values.queue2.sap_in_dropped_loprio_bits.delta",
    "values.queue2.sap_in_dropped_loprio_bits.rate",
    "values.queue2.sap_in_dropped_loprio_bits.val",
    "values.queue2.sap_in_dropped_loprio_pkts.delta",
    "values.queue2.sap_in_dropped_loprio_pkts.rate",
    "values.queue2.sap_in_dropped_loprio_pkts.val",
    "values.queue2.sap_in_fwd_inprof_bits.delta",
    "values.queue2.sap_in_fwd_inprof_bits.rate",
    "values.queue2.sap_in_fwd_inprof_bits.val",
    "values.queue2.sap_in_fwd_inprof_pkts.delta",
    "values.queue2.sap_in_fwd_inprof_pkts.rate",
    "values.queue2.sap_in_fwd_inprof_pkts.val",
    "values.queue2.sap_in_fwd_outprof_bits.delta",
    "values.queue2.sap_in_fwd_outprof_bits.rate",
    "values.queue2.sap_in_fwd_outprof_bits.val",
    "values.queue2.sap_in_fwd_outprof_pkts.delta",
    "values.queue2.sap_in_fwd_outprof_pkts.rate",
    "values.queue2.sap_in_fwd_outprof_pkts.val",
    "values.queue2.sap_in_offered_hiprio_bits.delta",
    "values.queue2.sap_in_offered_hiprio_bits.rate",
    "values.queue2.sap_in_offered_hiprio_bits.val",
    "values.queue2.sap_in_offered_hiprio_pkts.delta",
    "values.queue2.sap_in_offered_hiprio_pkts.rate",
    "values.queue2.sap_in_offered_hiprio_pkts.val",
    "values.queue2.sap_in_offered_loprio_bits.delta",
    "values.queue2.sap_in_offered_loprio_bits.rate",
    "values.queue2.sap_in_offered_loprio_bits.val",
    "values.queue2.sap_in_offered_loprio_pkts.delta",
    "values.queue2.sap_in_offered_loprio_pkts.rate",
    "values.queue2.sap_in_offered_loprio_pkts.val",
    "values.queue2.sap_in_offered_uncolored_bits.delta",
    "values.queue2.sap_in_offered_uncolored_bits.rate",
    "values.queue2.sap_in_offered_uncolored_bits.val",
    "values.queue2.sap_in_offered_uncolored_pkts.delta",
    "values.queue2.sap_in_offered_uncolored_pkts.rate",
    "values.queue2.sap_in_offered_uncolored_pkts.val",
    "values.queue2.sap_out_dropped_inprof_bits.delta",
    "values.queue2.sap_out_dropped_inprof_bits.rate",
    "values.queue2.sap_out_dropped_inprof_bits.val",
    "values.queue2.sap_out_dropped_inprof_pkts.delta",
    "values.queue2.sap_out_dropped_inprof_pkts.rate",
    "values.queue2.sap_out_dropped_inprof_pkts.val",
    "values.queue2.sap_out_dropped_outprof_bits.delta",
    "values.queue2.sap_out_dropped_outprof_bits.rate",
    "values.queue2.sap_out_dropped_outprof_bits.val",
    "values.queue2.sap_out_dropped_outprof_pkts.delta",
    "values.queue2.sap_out_dropped_outprof_pkts.rate",
    "values.queue2.sap_out_dropped_outprof_pkts.val",
    "values.queue2.sap_out_fwd_inprof_bits.delta",
    "values.queue2.sap_out_fwd_inprof_bits.rate",
    "values.queue2.sap_out_fwd_inprof_bits.val",
    "values.queue2.sap_out_fwd_inprof_pkts.delta",
    "values.queue2.sap_out_fwd_inprof_pkts.rate",
    "values.queue2.sap_out_fwd_inprof_pkts.val",
    "values.queue2.sap_out_fwd_outprof_bits.delta",
    "values.queue2.sap_out_fwd_outprof_bits.rate",
    "values.queue2.sap_out_fwd_outprof_bits.val",
    "values.queue2.sap_out_fwd_outprof_pkts.delta",
    "values.queue2.sap_out_fwd_outprof_pkts.rate",
    "values.queue2.sap_out_fwd_outprof_pkts.val",
    "values.queue3.sap_in_dropped_hiprio_bits.delta",
    "values.queue3.sap_in_dropped_hiprio_bits.rate",
    "values.queue3.sap_in_dropped_hiprio_bits.val",
    "values.queue3.sap_in_dropped_hiprio_pkts.delta",
    "values.queue3.sap_in_dropped_hiprio_pkts.rate",
    "values.queue3.sap_in_dropped_hiprio_pkts.val",
    "values.queue3.sap_in_dropped_loprio_bits.delta",
    "values.queue3.sap_in_dropped_loprio_bits.rate",
    "values.queue3.sap_in_dropped_loprio_bits.val",
    "values.queue3.sap_in_dropped_loprio_pkts.delta",
    "values.queue3.sap_in_dropped_loprio_pkts.rate",
    "values.queue3.sap_in_dropped_loprio_pkts.val",
    "values.queue3.sap_in_fwd_inprof_bits.delta",
    "values.queue3.sap_in_fwd_inprof_bits.rate",
    "values.queue3.sap_in_fwd_inprof_bits.val",
    "values.queue3.sap_in_fwd_inprof_pkts.delta",
    "values.queue3.sap_in_fwd_inprof_pkts.rate",
    "values.queue3.sap_in_fwd_inprof_pkts.val",
    "values.queue3.sap_in_fwd_outprof_bits.delta",
    "values.queue3.sap_in_fwd_outprof_bits.rate",
    "values.queue3.sap_in_fwd_outprof_bits.val",
    "values.queue3.sap_in_fwd_outprof_pkts.delta",
    "values.queue3.sap_in_fwd_outprof_pkts.rate",
    "values.queue3.sap_in_fwd_outprof_pkts.val",
    "values.queue3.sap_in_offered_hiprio_bits.delta",
    "values.queue3.sap_in_offered_hiprio_bits.rate",
    "values.queue3.sap_in_offered_hiprio_bits.val",
    "values.queue3.sap_in_offered_hiprio_pkts.delta",
    "values.queue3.sap_in_offered_hiprio_pkts.rate",
    "values.queue3.sap_in_offered_hiprio_pkts.val",
    "values.queue3.sap_in_offered_loprio_bits.delta",
    "values.queue3.sap_in_offered_loprio_bits.rate",
    "values.queue3.sap_in_offered_loprio_bits.val",
    "values.queue3.sap_in_offered_loprio_pkts.delta",
    "values.queue3.sap_in_offered_loprio_pkts.rate",
    "values.queue3.sap_in_offered_loprio_pkts.val",
    "values.queue3.sap_in_offered_uncolored_bits.delta",
    "values.queue3.sap_in_offered_uncolored_bits.rate",
    "values.queue3.sap_in_offered_uncolored_bits.val",
    "values.queue3.sap_in_offered_uncolored_pkts.delta",
    "values.queue3.sap_in_offered_uncolored_pkts.rate",
    "values.queue3.sap_in_offered_uncolored_pkts.val",
    "values.queue3.sap_out_dropped_inprof_bits.delta",
    "values.queue3.sap_out_dropped_inprof_bits.rate",
    "values.queue3.sap_out_dropped_inprof_bits.val",
    "values.queue3.sap_out_dropped_inprof_pkts.delta",
    "values.queue3.sap_out_dropped_inprof_pkts.rate",
    "values.queue3.sap_out_dropped_inprof_pkts.val",
    "values.queue3.sap_out_dropped_outprof_bits.delta",
    "values.queue3.sap_out_dropped_outprof_bits.rate",
    "values.queue3.sap_out_dropped_outprof_bits.val",
    "values.queue3.sap_out_dropped_outprof_pkts.delta",
    "values.queue3.sap_out_dropped_outprof_pkts.rate",
    "values.queue3.sap_out_dropped_outprof_pkts.val",
    "values.queue3.sap_out_fwd_inprof_bits.delta",
    "values.queue3.sap_out_fwd_inprof_bits.rate",
    "values.queue3.sap_out_fwd_inprof_bits.val",
    "values.queue3.sap_out_fwd_inprof_pkts.delta",
    "values.queue3.sap_out_fwd_inprof_pkts.rate",
    "values.queue3.sap_out_fwd_inprof_pkts.val",
    "values.queue3.sap_out_fwd_outprof_bits.delta",
    "values.queue3.sap_out_fwd_outprof_bits.rate",
    "values.queue3.sap_out_fwd_outprof_bits.val",
    "values.queue3.sap_out_fwd_outprof_pkts.delta",
    "values.queue3.sap_out_fwd_outprof_pkts.rate",
    "values.queue3.sap_out_fwd_outprof_pkts.val",
    "values.queue4.sap_in_dropped_hiprio_bits.delta",
    "values.queue4.sap_in_dropped_hiprio_bits.rate",
    "values.queue4.sap_in_dropped_hiprio_bits.val",
    "values.queue4.sap_in_dropped_hiprio_pkts.delta",
    "values.queue4.sap_in_dropped_hiprio_pkts.rate",
    "values.queue4.sap_in_dropped_hiprio_pkts.val",
    "values.queue4.sap_in_dropped_loprio_bits.delta",
    "values.queue4.sap_in_dropped_loprio_bits.rate",
    "values.queue4.sap_in_dropped_loprio_bits.val",
    "values.queue4.sap_in_dropped_loprio_pkts.delta",
    "values.queue4.sap_in_dropped_loprio_pkts.rate",
    "values.queue4.sap_in_dropped_loprio_pkts.val",
    "values.queue4.sap_in_fwd_inprof_bits.delta",
    "values.queue4.sap_in_fwd_inprof_bits.rate",
    "values.queue4.sap_in_fwd_inprof_bits.val",
    "values.queue4.sap_in_fwd_inprof_pkts.delta",
    "values.queue4.sap_in_fwd_inprof_pkts.rate",
    "values.queue4.sap_in_fwd_inprof_pkts.val",
    "values.queue4.sap_in_fwd_outprof_bits.delta",
    "values.queue4.sap_in_fwd_outprof_bits.rate",
    "values.queue4.sap_in_fwd_outprof_bits.val",
    "values.queue4.sap_in_fwd_outprof_pkts.delta",
    "values.queue4.sap_in_fwd_outprof_pkts.rate",
    "values.queue4.sap_in_fwd_outprof_pkts.val",
    "values.queue4.sap_in_offered_hiprio_bits.delta",
    "values.queue4.sap_in_offered_hiprio_bits.rate",
    "values.queue4.sap_in_offered_hiprio_bits.val",
    "values.queue4.sap_in_offered_hiprio_pkts.delta",
    "values.queue4.sap_in_offered_hiprio_pkts.rate",
    "values.queue4.sap_in_offered_hiprio_pkts.val",
    "values.queue4.sap_in_offered_loprio_bits.delta",
    "values.queue4.sap_in_offered_loprio_bits.rate",
    "values.queue4.sap_in_offered_loprio_bits.val",
    "values.queue4.sap_in_offered_loprio_pkts.delta",
    "values.queue4.sap_in_offered_loprio_pkts.rate",
    "values.queue4.sap_in_offered_loprio_pkts.val",
    "values.queue4.sap_in_offered_uncolored_bits.delta",
    "values.queue4.sap_in_offered_uncolored_bits.rate",
    "values.queue4.sap_in_offered_uncolored_bits.val",
    "values.queue4.sap_in_offered_uncolored_pkts.delta",
    "values.queue4.sap_in_offered_uncolored_pkts.rate",
    "values.queue4.sap_in_offered_uncolored_pkts.val",
    "values.queue4.sap_out_dropped_inprof_bits.delta",
    "values.queue4.sap_out_dropped_inprof_bits.rate",
    "values.queue4.sap_out_dropped_inprof_bits.val",
    "values.queue4.sap_out_dropped_inprof_pkts.delta",
    "values.queue4.sap_out_dropped_inprof_pkts.rate",
    "values.queue4.sap_out_dropped_inprof_pkts.val",
    "values.queue4.sap_out_dropped_outprof_bits.delta",
    "values.queue4.sap_out_dropped_outprof_bits.rate",
    "values.queue4.sap_out_dropped_outprof_bits.val",
    "values.queue4.sap_out_dropped_outprof_pkts.delta",
    "values.queue4.sap_out_dropped_outprof_pkts.rate",
    "values.queue4.sap_out_dropped_outprof_pkts.val",
    "values.queue4.sap_out_fwd_inprof_bits.delta",
    "values.queue4.sap_out_fwd_inprof_bits.rate",
    "values.queue4.sap_out_fwd_inprof_bits.val",
    "values.queue4.sap_out_fwd_inprof_pkts.delta",
    "values.queue4.sap_out_fwd_inprof_pkts.rate",
    "values.queue4.sap_out_fwd_inprof_pkts.val",
    "values.queue4.sap_out_fwd_outprof_bits.delta",
    "values.queue4.sap_out_fwd_outprof_bits.rate",
    "values.queue4.sap_out_fwd_outprof_bits.val",
    "values.queue4.sap_out_fwd_outprof_pkts.delta",
    "values.queue4.sap_out_fwd_outprof_pkts.rate",
    "values.queue4.sap_out_fwd_outprof_pkts.val",
    "values.queue5.sap_in_dropped_hiprio_bits.delta",
    "values.queue5.sap_in_dropped_hiprio_bits.rate",
    "values.queue5.sap_in_dropped_hiprio_bits.val",
    "values.queue5.sap_in_dropped_hiprio_pkts.delta",
    "values.queue5.sap_in_dropped_hiprio_pkts.rate",
    "values.queue5.sap_in_dropped_hiprio_pkts.val",
    "values.queue5.sap_in_dropped_loprio_bits.delta",
    "values.queue5.sap_in_dropped_loprio_bits.rate",
    "values.queue5.sap_in_dropped_loprio_bits.val",
    "values.queue5.sap_in_dropped_loprio_pkts.delta",
    "values.queue5.sap_in_dropped_loprio_pkts.rate",
    "values.queue5.sap_in_dropped_loprio_pkts.val",
    "values.queue5.sap_in_fwd_inprof_bits.delta",
    "values.queue5.sap_in_fwd_inprof_bits.rate",
    "values.queue5.sap_in_fwd_inprof_bits.val",
    "values.queue5.sap_in_fwd_inprof_pkts.delta",
    "values.queue5.sap_in_fwd_inprof_pkts.rate",
    "values.queue5.sap_in_fwd_inprof_pkts.val",
    "values.queue5.sap_in_fwd_outprof_bits.delta",
    "values.queue5.sap_in_fwd_outprof_bits.rate",
    "values.queue5.sap_in_fwd_outprof_bits.val",
    "values.queue5.sap_in_fwd_outprof_pkts.delta",
    "values.queue5.sap_in_fwd_outprof_pkts.rate",
    "values.queue5.sap_in_fwd_outprof_pkts.val",
    "values.queue5.sap_in_offered_hiprio_bits.delta",
    "values.queue5.sap_in_offered_hiprio_bits.rate",
    "values.queue5.sap_in_offered_hiprio_bits.val",
    "values.queue5.sap_in_offered_hiprio_pkts.delta",
    "values.queue5.sap_in_offered_hiprio_pkts.rate",
    "values.queue5.sap_in_offered_hiprio_pkts.val",
    "values.queue5.sap_in_offered_loprio_bits.delta",
    "values.queue5.sap_in_offered_loprio_bits.rate",
    "values.queue5.sap_in_offered_loprio_bits.val",
    "values.queue5.sap_in_offered_loprio_pkts.delta",
    "values.queue5.sap_in_offered_loprio_pkts.rate",
    "values.queue5.sap_in_offered_loprio_pkts.val",
    "values.queue5.sap_in_offered_uncolored_bits.delta",
    "values.queue5.sap_in_offered_uncolored_bits.rate",
    "values.queue5.sap_in_offered_uncolored_bits.val",
    "values.queue5.sap_in_offered_uncolored_pkts.delta",
    "values.queue5.sap_in_offered_uncolored_pkts.rate",
    "values.queue5.sap_in_offered_uncolored_pkts.val",
    "values.queue5.sap_out_dropped_inprof_bits.delta",
    "values.queue5.sap_out_dropped_inprof_bits.rate",
    "values.queue5.sap_out_dropped_inprof_bits.val",
    "values.queue5.sap_out_dropped_inprof_pkts.delta",
    "values.queue5.sap_out_dropped_inprof_pkts.rate",
    "values.queue5.sap_out_dropped_inprof_pkts.val",
    "values.queue5.sap_out_dropped_outprof_bits.delta",
    "values.queue5.sap_out_dropped_outprof_bits.rate",
    "values.queue5.sap_out_dropped_outprof_bits.val",
    "values.queue5.sap_out_dropped_outprof_pkts.delta",
    "values.queue5.sap_out_dropped_outprof_pkts.rate",
    "values.queue5.sap_out_dropped_outprof_pkts.val",
    "values.queue5.sap_out_fwd_inprof_bits.delta",
    "values.queue5.sap_out_fwd_inprof_bits.rate",
    "values.queue5.sap_out_fwd_inprof_bits.val",
    "values.queue5.sap_out_fwd_inprof_pkts.delta",
    "values.queue5.sap_out_fwd_inprof_pkts.rate",
    "values.queue5.sap_out_fwd_inprof_pkts.val",
    "values.queue5.sap_out_fwd_outprof_bits.delta",
    "values.queue5.sap_out_fwd_outprof_bits.rate",
    "values.queue5.sap_out_fwd_outprof_bits.val",
    "values.queue5.sap_out_fwd_outprof_pkts.delta",
    "values.queue5.sap_out_fwd_outprof_pkts.rate",
    "values.queue5.sap_out_fwd_outprof_pkts.val",
    "values.queue6.sap_in_dropped_hiprio_bits.delta",
    "values.queue6.sap_in_dropped_hiprio_bits.rate",
    "values.queue6.sap_in_dropped_hiprio_bits.val",
    "values.queue6.sap_in_dropped_hiprio_pkts.delta",
    "values.queue6.sap_in_dropped_hiprio_pkts.rate",
    "values.queue6.sap_in_dropped_hiprio_pkts.val",
    "values.queue6.sap_in_dropped_loprio_bits.delta",
    "values.queue6.sap_in_dropped_loprio_bits.rate",
    "values.queue6.sap_in_dropped_loprio_bits.val",
    "values.queue6.sap_in_dropped_loprio_pkts.delta",
    "values.queue6.sap_in_dropped_loprio_pkts.rate",
    "values.queue6.sap_in_dropped_loprio_pkts.val",
    "values.queue6.sap_in_fwd_inprof_bits.delta",
    "values.queue6.sap_in_fwd_inprof_bits.rate",
    "values.queue6.sap_in_fwd_inprof_bits.val",
    "values.queue6.sap_in_fwd_inprof_pkts.delta",
    "values.queue6.sap_in_fwd_inprof_pkts.rate",
    "values.queue6.sap_in_fwd_inprof_pkts.val",
    "values.queue6.sap_in_fwd_outprof_bits.delta",
    "values.queue6.sap_in_fwd_outprof_bits.rate",
    "values.queue6.sap_in_fwd_outprof_bits.val",
    "values.queue6.sap_in_fwd_outprof_pkts.delta",
    "values.queue6.sap_in_fwd_outprof_pkts.rate",
    "values.queue6.sap_in_fwd_outprof_pkts.val",
    "values.queue6.sap_in_offered_hiprio_bits.delta",
    "values.queue6.sap_in_offered_hiprio_bits.rate",
    "values.queue6.sap_in_offered_hiprio_bits.val",
    "values.queue6.sap_in_offered_hiprio_pkts.delta",
    "values.queue6.sap_in_offered_hiprio_pkts.rate",
    "values.queue6.sap_in_offered_hiprio_pkts.val",
    "values.queue6.sap_in_offered_loprio_bits.delta",
    "values.queue6.sap_in_offered_loprio_bits.rate",
    "values.queue6.sap_in_offered_loprio_bits.val",
    "values.queue6.sap_in_offered_loprio_pkts.delta",
    "values.queue6.sap_in_offered_loprio_pkts.rate",
    "values.queue6.sap_in_offered_loprio_pkts.val",
    "values.queue6.sap_in_offered_uncolored_bits.delta",
    "values.queue6.sap_in_offered_uncolored_bits.rate",
    "values.queue6.sap_in_offered_uncolored_bits.val",
    "values.queue6.sap_in_offered_uncolored_pkts.delta",
    "values.queue6.sap_in_offered_uncolored_pkts.rate",
    "values.queue6.sap_in_offered_uncolored_pkts.val",
    "values.queue6.sap_out_dropped_inprof_bits.delta",
    "values.queue6.sap_out_dropped_inprof_bits.rate",
    "values.queue6.sap_out_dropped_inprof_bits.val",
    "values.queue6.sap_out_dropped_inprof_pkts.delta",
    "values.queue6.sap_out_dropped_inprof_pkts.rate",
    "values.queue6.sap_out_dropped_inprof_pkts.val",
    "values.queue6.sap_out_dropped_outprof_bits.delta",
    "values.queue6.sap_out_dropped_outprof_bits.rate",
    "values.queue6.sap_out_dropped_outprof_bits.val",
    "values.queue6.sap_out_dropped_outprof_pkts.delta",
    "values.queue6.sap_out_dropped_outprof_pkts.rate",
    "values.queue6.sap_out_dropped_outprof_pkts.val",
    "values.queue6.sap_out_fwd_inprof_bits.delta",
    "values.queue6.sap_out_fwd_inprof_bits.rate",
    "values.queue6.sap_out_fwd_inprof_bits.val",
    "values.queue6.sap_out_fwd_inprof_pkts.delta",
    "values.queue6.sap_out_fwd_inprof_pkts.rate",
    "values.queue6.sap_out_fwd_inprof_pkts.val",
    "values.queue6.sap_out_fwd_outprof_bits.delta",
    "values.queue6.sap_out_fwd_outprof_bits.rate",
    "values.queue6.sap_out_fwd_outprof_bits.val",
    "values.queue6.sap_out_fwd_outprof_pkts.delta",
    "values.queue6.sap_out_fwd_outprof_pkts.rate",
    "values.queue6.sap_out_fwd_outprof_pkts.val",
    "values.queue7.sap_in_dropped_hiprio_bits.delta",
    "values.queue7.sap_in_dropped_hiprio_bits.rate",
    "values.queue7.sap_in_dropped_hiprio_bits.val",
    "values.queue7.sap_in_dropped_hiprio_pkts.delta",
    "values.queue7.sap_in_dropped_hiprio_pkts.rate",
    "values.queue7.sap_in_dropped_hiprio_pkts.val",
    "values.queue7.sap_in_dropped_loprio_bits.delta",
    "values.queue7.sap_in_dropped_loprio_bits.rate",
    "values.queue7.sap_in_dropped_loprio_bits.val",
    "values.queue7.sap_in_dropped_loprio_pkts.delta",
    "values.queue7.sap_in_dropped_loprio_pkts.rate",
    "values.queue7.sap_in_dropped_loprio_pkts.val",
    "values.queue7.sap_in_fwd_inprof_bits.delta",
    "values.queue7.sap_in_fwd_inprof_bits.rate",
    "values.queue7.sap_in_fwd_inprof_bits.val",
    "values.queue7.sap_in_fwd_inprof_pkts.delta",
    "values.queue7.sap_in_fwd_inprof_pkts.rate",
    "values.queue7.sap_in_fwd_inprof_pkts.val",
    "values.queue7.sap_in_fwd_outprof_bits.delta",
    "values.queue7.sap_in_fwd_outprof_bits.rate",
    "values.queue7.sap_in_fwd_outprof_bits.val",
    "values.queue7.sap_in_fwd_outprof_pkts.delta",
    "values.queue7.sap_in_fwd_outprof_pkts.rate",
    "values.queue7.sap_in_fwd_outprof_pkts.val",
    "values.queue7.sap_in_offered_hiprio_bits.delta",
    "values.queue7.sap_in_offered_hiprio_bits.rate",
    "values.queue7.sap_in_offered_hiprio_bits.val",
    "values.queue7.sap_in_offered_hiprio_pkts.delta",
    "values.queue7.sap_in_offered_hiprio_pkts.rate",
    "values.queue7.sap_in_offered_hiprio_pkts.val",
    "values.queue7.sap_in_offered_loprio_bits.delta",
    "values.queue7.sap_in_offered_loprio_bits.rate",
    "values.queue7.sap_in_offered_loprio_bits.val",
    "values.queue7.sap_in_offered_loprio_pkts.delta",
    "values.queue7.sap_in_offered_loprio_pkts.rate",
    "values.queue7.sap_in_offered_loprio_pkts.val",
    "values.queue7.sap_in_offered_uncolored_bits.delta",
    "values.queue7.sap_in_offered_uncolored_bits.rate",
    "values.queue7.sap_in_offered_uncolored_bits.val",
    "values.queue7.sap_in_offered_uncolored_pkts.delta",
    "values.queue7.sap_in_offered_uncolored_pkts.rate",
    "values.queue7.sap_in_offered_uncolored_pkts.val",
    "values.queue7.sap_out_dropped_inprof_bits.delta",
    "values.queue7.sap_out_dropped_inprof_bits.rate",
    "values.queue7.sap_out_dropped_inprof_bits.val",
    "values.queue7.sap_out_dropped_inprof_pkts.delta",
    "values.queue7.sap_out_dropped_inprof_pkts.rate",
    "values.queue7.sap_out_dropped_inprof_pkts.val",
    "values.queue7.sap_out_dropped_outprof_bits.delta",
    "values.queue7.sap_out_dropped_outprof_bits.rate",
    "values.queue7.sap_out_dropped_outprof_bits.val",
    "values.queue7.sap_out_dropped_outprof_pkts.delta",
    "values.queue7.sap_out_dropped_outprof_pkts.rate",
    "values.queue7.sap_out_dropped_outprof_pkts.val",
    "values.queue7.sap_out_fwd_inprof_bits.delta",
    "values.queue7.sap_out_fwd_inprof_bits.rate",
    "values.queue7.sap_out_fwd_inprof_bits.val",
    "values.queue7.sap_out_fwd_inprof_pkts.delta",
    "values.queue7.sap_out_fwd_inprof_pkts.rate",
    "values.queue7.sap_out_fwd_inprof_pkts.val",
    "values.queue7.sap_out_fwd_outprof_bits.delta",
    "values.queue7.sap_out_fwd_outprof_bits.rate",
    "values.queue7.sap_out_fwd_outprof_bits.val",
    "values.queue7.sap_out_fwd_outprof_pkts.delta",
    "values.queue7.sap_out_fwd_outprof_pkts.rate",
    "values.queue7.sap_out_fwd_outprof_pkts.val",
    "@timestamp",
    "@processing_time",
    "@exit_time",
    "@collect_time_min",
    "meta.intercloud",
    "meta.vrtr_ifglobalindex",
    "meta.sap_in_policy",
    "meta.remote.full_name",
    "meta.remote.short_name",
    "meta.org.types",
    "meta.org.full_name",
    "meta.org.hide",
    "meta.org.tags",
    "meta.org.short_name",
    "meta.org.tags_str",
    "meta.vrtr_iftype",
    "meta.id",
    "meta.sap_name",
    "meta.descr",
    "meta.ipv6_prefix_len",
    "meta.svc_edge_id",
    "meta.vrtr_ifoperstatus",
    "meta.sap_oper_status",
    "meta.device_info.network",
    "meta.device_info.loc_type",
    "meta.device_info.model",
    "meta.device_info.state",
    "meta.device_info.location.lat",
    "meta.device_info.location.lon",
    "meta.device_info.manufacturer",
    "meta.device_info.os",
    "meta.device_info.role",
    "meta.device_info.loc_name",
    "meta.vrtr_ifencapvalue",
    "meta.vrtr_name",
    "meta.service_type",
    "meta.vrtr_ifindex",
    "meta.ipv6",
    "meta.vrtr_ifdescr",
    "meta.sensor_id",
    "meta.descr_parts",
    "meta.device",
    "meta.vrtr_ifadminstatus",
    "meta.sap_egr_policy",
    "meta.port_name",
    "meta.oper_status",
    "meta.name",
    "meta.sap_admin_status",
    "meta.admin_status",
    "meta.peer.ipv6",
    "meta.peer.asn",
    "meta.sap_descr",
];

/// The narrow SNMP interface format placed by `policy`.
pub fn narrow(policy: &SchemaPolicy) -> Result<SchemaDescriptor, SchemaError> {
    derive_schema(NARROW_COLUMNS, policy)
}

/// The wide SNMP interface format placed by `policy`.
pub fn wide(policy: &SchemaPolicy) -> Result<SchemaDescriptor, SchemaError> {
    derive_schema(WIDE_COLUMNS, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldGroup;

    #[test]
    fn test_narrow_groups() {
        let schema = narrow(&SchemaPolicy::default()).unwrap();

        assert_eq!(schema.len(), NARROW_COLUMNS.len());
        assert_eq!(schema.fields_in(FieldGroup::Measurement).count(), 14);
        assert_eq!(schema.fields_in(FieldGroup::Metadata).count(), 20);
        assert_eq!(schema.fields_in(FieldGroup::Discard).count(), 3);
        assert_eq!(schema.fields_in(FieldGroup::TopLevel).count(), 0);
        assert_eq!(
            schema.timestamp_field().map(|f| f.source_name.as_str()),
            Some("@timestamp")
        );
    }

    #[test]
    fn test_narrow_measurements_pair_in_and_out() {
        let measurements = narrow(&SchemaPolicy::default())
            .unwrap()
            .fields_in(FieldGroup::Measurement)
            .map(|f| f.source_name.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            &measurements[..6],
            [
                "values.if_in_bits.delta",
                "values.if_out_bits.delta",
                "values.in_bcast_pkts.delta",
                "values.out_bcast_pkts.delta",
                "values.in_bits.delta",
                "values.out_bits.delta",
            ]
        );
    }

    #[test]
    fn test_wide_groups() {
        let schema = wide(&SchemaPolicy::default()).unwrap();

        assert_eq!(schema.len(), 616);
        assert_eq!(schema.fields_in(FieldGroup::Measurement).count(), 564);
        assert_eq!(schema.fields_in(FieldGroup::Metadata).count(), 48);
        assert_eq!(schema.fields_in(FieldGroup::Discard).count(), 3);
        assert_eq!(schema.fields_in(FieldGroup::TopLevel).count(), 0);
        assert_eq!(
            schema.timestamp_field().map(|f| f.source_name.as_str()),
            Some("@timestamp")
        );

        // three columns per counter
        assert!(
            schema
                .fields_in(FieldGroup::Measurement)
                .all(|f| [".delta", ".rate", ".val"]
                    .iter()
                    .any(|suffix| f.source_name.ends_with(suffix)))
        );
    }

    #[test]
    fn test_wide_series_identifiers() {
        let schema = wide(&SchemaPolicy::series_identifiers()).unwrap();
        assert_eq!(
            schema.field("meta.name").map(|f| f.target_path.as_str()),
            Some("interfaceName")
        );
        assert_eq!(
            schema.field("meta.peer.asn").map(|f| f.target_path.as_str()),
            Some("peer.asn")
        );
        assert_eq!(schema.required().len(), 3);
    }

    #[test]
    fn test_narrow_series_identifiers() {
        let schema = narrow(&SchemaPolicy::series_identifiers()).unwrap();

        assert_eq!(
            schema.field("meta.name").map(|f| f.target_path.as_str()),
            Some("interfaceName")
        );
        assert_eq!(
            schema
                .field("meta.device_info.location.lat")
                .map(|f| f.target_path.as_str()),
            Some("device_info.location.lat")
        );
        assert_eq!(schema.required().len(), 3);
    }
}
