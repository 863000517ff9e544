use crate::domain::model::MacAddressList;
use std::collections::BTreeMap;

/// 收集某主機在所有 MAC 保留來源中的 network -> MAC 對照。
/// 來源依輸入順序折疊，同一網路後出現者覆蓋前者。
pub fn mac_mappings_for_host(hostname: &str, mac_list: &MacAddressList) -> BTreeMap<String, String> {
    mac_list
        .items
        .iter()
        .filter_map(|source| source.status.mac_reservations.get(hostname))
        .fold(BTreeMap::new(), |mut mappings, reservation| {
            for (net, mac) in &reservation.reservations {
                mappings.insert(net.clone(), mac.clone());
            }
            mappings
        })
}
