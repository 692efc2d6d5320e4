//! Route definitions for the ConnectWise Automate REST API v1.

use super::{get_many, get_one, patch_one, post_one, RouteDef, DELETE_EMPTY};

pub(super) const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "Apitoken",
        operations: &[get_one("AuthInformation"), post_one("TokenResult")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Clients/{id}/Documents",
        operations: &[get_many("LabTechDocument")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Clients/{id}/Productkeys",
        operations: &[get_many("ProductKey"), post_one("ProductKey")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Computermenus",
        operations: &[get_many("LabTechComputerMenu"), post_one("LabTechComputerMenu")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Computers/{id}/Bios",
        operations: &[get_one("LabTechComputerBios")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Computers/{id}/Commandexecute",
        operations: &[get_many("CommandExecute"), post_one("CommandExecute")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Computers/{id}/Computerpatchingpolicies",
        operations: &[get_many("LabTechComputerPatchingPolicy")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Computers/{id}/Services",
        operations: &[get_many("ComputerService")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Contacts",
        operations: &[get_many("AutomateContact"), post_one("AutomateContact")],
        count: false,
        id: true,
    },
    RouteDef {
        path: "Dataviewfolders/{id}",
        operations: &[get_one("LabTechDataViewFolder")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Networkdevices",
        operations: &[get_many("NetworkDevice"), post_one("NetworkDevice")],
        count: false,
        id: true,
    },
    RouteDef {
        path: "Patchactions/Reattemptfailed",
        operations: &[post_one("GenericMessageModel")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "System/Serverinformation",
        operations: &[get_many("ServerInformation")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Useraudits",
        operations: &[get_many("UserAudit"), post_one("UserAudit")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Userprofiles",
        operations: &[get_one("UserProfile")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Users/Folders/{id}",
        operations: &[
            get_one("AutomateUserFolder"),
            DELETE_EMPTY,
            patch_one("AutomateUserFolder"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "Users/{id}/Useraccess",
        operations: &[get_one("AutomateUserAccess")],
        count: false,
        id: false,
    },
];
